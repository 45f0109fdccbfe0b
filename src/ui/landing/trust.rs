use leptos::prelude::*;

use crate::core::content::TRUST_BADGES;
use crate::core::motion::{FADE_IN, FADE_IN_UP, STAGGER};
use crate::core::visibility::InViewOptions;
use crate::ui::icon::Icon;
use crate::ui::in_view::use_in_view;
use crate::ui::motion::Reveal;

/// Compliance badges strip below the hero
#[component]
pub fn TrustSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());
    // Badges form a nested container in the second stagger slot
    let badges = STAGGER.after(STAGGER.delay(1));

    view! {
        <section class="trust-section" node_ref=section_ref>
            <div class="trust-content">
                <Reveal preset=FADE_IN shown=in_view delay_ms=STAGGER.delay(0) class="trust-label">
                    "Enterprise-Grade Security & Compliance"
                </Reveal>
                <div class="trust-badges">
                    {TRUST_BADGES
                        .iter()
                        .enumerate()
                        .map(|(i, badge)| {
                            view! {
                                <Reveal
                                    preset=FADE_IN_UP
                                    shown=in_view
                                    delay_ms=badges.delay(i)
                                    class="trust-badge"
                                >
                                    <div class="trust-badge-icon">
                                        <Icon name=badge.icon size=24 />
                                    </div>
                                    <span>{badge.label}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
