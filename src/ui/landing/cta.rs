use leptos::prelude::*;

use crate::core::content::Anchor;
use crate::core::motion::SCALE_IN;
use crate::core::visibility::InViewOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::motion::Reveal;

/// Closing call to action
#[component]
pub fn CtaSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());

    view! {
        <section class="cta-section" node_ref=section_ref>
            <div class="cta-container">
                <Reveal preset=SCALE_IN shown=in_view class="cta-card">
                    <div class="cta-content">
                        <h2>"Ready to Transform Your Security Operations?"</h2>
                        <p>
                            "Join 500+ security companies who trust IRA FORCE to power their workforce management. "
                            "Start your free 14-day trial today—no credit card required."
                        </p>
                        <div class="cta-buttons">
                            <a href=Anchor::Trial.href() class="btn btn-primary btn-lg">
                                "Start Free Trial"
                                <Icon name=icons::ARROW_RIGHT />
                            </a>
                            <a href=Anchor::Demo.href() class="btn btn-secondary btn-lg">
                                "Schedule a Demo"
                            </a>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
