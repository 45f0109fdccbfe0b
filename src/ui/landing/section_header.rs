use leptos::prelude::*;

use crate::core::motion::FADE_IN_UP;
use crate::ui::icon::Icon;
use crate::ui::motion::Reveal;

/// Badge, title and lead paragraph opening a scroll-gated section
#[component]
pub fn SectionHeader(
    badge_icon: &'static str,
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(into)] shown: Signal<bool>,
) -> impl IntoView {
    view! {
        <Reveal preset=FADE_IN_UP shown=shown class="section-header">
            <span class="section-badge">
                <Icon name=badge_icon size=16 />
                {badge}
            </span>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </Reveal>
    }
}
