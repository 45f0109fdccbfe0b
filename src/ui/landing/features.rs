use leptos::prelude::*;

use crate::core::content::{Anchor, FEATURES};
use crate::core::motion::{FADE_IN_UP, STAGGER};
use crate::core::visibility::InViewOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::landing::SectionHeader;
use crate::ui::motion::Reveal;

/// Six-card product capability grid
#[component]
pub fn FeaturesSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());

    view! {
        <section class="features-section" id=Anchor::Features.id() node_ref=section_ref>
            <SectionHeader
                badge_icon=icons::ZAP
                badge="Platform Features"
                title="Everything You Need to Run World-Class Security Operations"
                subtitle="A comprehensive suite of tools designed for modern security workforce management."
                shown=in_view
            />

            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        view! {
                            <Reveal
                                preset=FADE_IN_UP
                                shown=in_view
                                delay_ms=STAGGER.delay(i)
                                class="feature-card"
                            >
                                <div class="feature-icon">
                                    <Icon name=feature.icon size=28 />
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <ul class="feature-list">
                                    {feature
                                        .bullets
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    <Icon name=icons::CHECK_CIRCLE size=16 />
                                                    {*item}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::landing::render_html;

    #[test]
    fn test_six_cards_with_three_bullets_each() {
        let html = render_html(|| view! { <FeaturesSection /> });
        assert_eq!(html.matches("class=\"reveal feature-card\"").count(), 6);
        assert_eq!(html.matches("class=\"feature-list\"").count(), 6);
        assert_eq!(html.matches("/icons/check-circle.svg").count(), 18);
    }

    #[test]
    fn test_section_anchor_and_hidden_state() {
        let html = render_html(|| view! { <FeaturesSection /> });
        assert!(html.contains("id=\"features\""));
        // Header plus six cards, all offset until scrolled into view
        assert_eq!(html.matches("opacity: 0;").count(), 7);
    }
}
