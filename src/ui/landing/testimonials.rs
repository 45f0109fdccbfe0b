use leptos::prelude::*;

use crate::core::content::{Anchor, RATING_STARS, TESTIMONIALS};
use crate::core::motion::{FADE_IN_UP, STAGGER};
use crate::core::visibility::InViewOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::landing::SectionHeader;
use crate::ui::motion::Reveal;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());

    view! {
        <section class="testimonials-section" id=Anchor::Testimonials.id() node_ref=section_ref>
            <SectionHeader
                badge_icon=icons::STAR
                badge="Customer Stories"
                title="Trusted by Security Leaders Nationwide"
                subtitle="See how security companies are transforming their operations with IRA FORCE."
                shown=in_view
            />

            <div class="testimonials-grid">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(i, testimonial)| {
                        view! {
                            <Reveal
                                preset=FADE_IN_UP
                                shown=in_view
                                delay_ms=STAGGER.delay(i)
                                class="testimonial-card"
                            >
                                <div class="testimonial-rating">
                                    {(0..RATING_STARS)
                                        .map(|_| view! { <Icon name=icons::STAR_FILLED size=18 class="star" /> })
                                        .collect_view()}
                                </div>
                                <p class="testimonial-content">{format!("\"{}\"", testimonial.quote)}</p>
                                <div class="testimonial-author">
                                    <div class="testimonial-avatar">{testimonial.initials}</div>
                                    <div class="testimonial-info">
                                        <h4>{testimonial.author}</h4>
                                        <p>{testimonial.byline()}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
