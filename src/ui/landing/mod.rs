//! Landing page sections
//!
//! Rendered top to bottom in this order:
//! - Navbar, fixed, with the mobile menu
//! - Hero, animated on load
//! - Trust badges
//! - Features
//! - Command center
//! - Pricing
//! - Testimonials
//! - Closing call to action
//! - Footer
//!
//! Every section between the hero and the footer owns one visibility
//! observer and reveals its children when it scrolls into view.

mod command_center;
mod cta;
mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod section_header;
mod testimonials;
mod trust;

use leptos::prelude::*;

pub use command_center::CommandCenterSection;
pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navbar::{Logo, Navbar};
pub use pricing::PricingSection;
pub use section_header::SectionHeader;
pub use testimonials::TestimonialsSection;
pub use trust::TrustSection;

/// Whole page body, without document metadata
#[component]
pub fn LandingLayout() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Navbar />
            <main>
                <HeroSection />
                <TrustSection />
                <FeaturesSection />
                <CommandCenterSection />
                <PricingSection />
                <TestimonialsSection />
                <CtaSection />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
pub(crate) fn render_html<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    Owner::new().with(|| f().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Anchor;

    #[test]
    fn test_every_rendered_anchor_has_a_section() {
        let html = render_html(|| view! { <LandingLayout /> });
        for anchor in Anchor::ALL {
            let id = format!("id=\"{}\"", anchor.id());
            if anchor.is_rendered_section() {
                assert_eq!(html.matches(&id).count(), 1, "missing section {}", anchor.id());
            } else {
                assert!(!html.contains(&id), "unexpected section {}", anchor.id());
            }
        }
    }

    #[test]
    fn test_initial_render_hides_only_scroll_gated_elements() {
        let html = render_html(|| view! { <LandingLayout /> });
        let gated = html.matches("class=\"reveal").count();
        assert!(gated > 0);
        // Every hidden inline style belongs to a reveal wrapper
        assert_eq!(html.matches("opacity: 0;").count(), gated);
        assert!(!html.contains("transition:"));
    }

    #[test]
    fn test_section_order() {
        let html = render_html(|| view! { <LandingLayout /> });
        let order = [
            "class=\"navbar\"",
            "class=\"hero",
            "class=\"trust-section\"",
            "id=\"features\"",
            "id=\"command-center\"",
            "id=\"pricing\"",
            "id=\"testimonials\"",
            "class=\"cta-section\"",
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
