#[cfg(test)]
mod tests {
    use crate::core::content::{
        ALERTS, Anchor, COMMAND_FEATURES, FEATURES, FOOTER_COLUMNS, HERO_STATS, LEGAL_LINKS,
        NAV_LINKS, PRICING_PLANS, Price, SOCIAL_LINKS, TESTIMONIALS, TRUST_BADGES,
    };
    use crate::core::motion::{KEYFRAME_PRESETS, MotionState, STAGGER};
    use crate::core::navbar::NavbarState;
    use crate::core::seo::structured_data;
    use crate::core::visibility::{InViewOptions, VisibilityTracker};

    #[test]
    fn test_content_counts() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(TRUST_BADGES.len(), 4);
        assert_eq!(FEATURES.len(), 6);
        assert!(FEATURES.iter().all(|f| f.bullets.len() == 3));
        assert_eq!(COMMAND_FEATURES.len(), 3);
        assert_eq!(ALERTS.len(), 3);
        assert_eq!(PRICING_PLANS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FOOTER_COLUMNS.len(), 4);
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(LEGAL_LINKS.len(), 3);
    }

    #[test]
    fn test_nav_links_target_rendered_sections() {
        for link in NAV_LINKS {
            assert!(link.anchor.is_rendered_section(), "{}", link.label);
        }
        assert_eq!(NAV_LINKS[1].anchor, Anchor::CommandCenter);
    }

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.featured).count(), 1);
        let custom: Vec<_> = PRICING_PLANS.iter().filter(|p| p.price.is_custom()).collect();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].name, "Enterprise");
        assert!(!custom[0].featured);
    }

    #[test]
    fn test_offers_follow_plan_prices() {
        let data = structured_data();
        let offers = data["offers"].as_array().unwrap();
        let monthly: Vec<&str> = PRICING_PLANS
            .iter()
            .filter_map(|p| match p.price {
                Price::Monthly(amount) => Some(amount),
                Price::Custom => None,
            })
            .collect();
        let offered: Vec<&str> = offers.iter().map(|o| o["price"].as_str().unwrap()).collect();
        assert_eq!(offered, monthly);
    }

    #[test]
    fn test_scroll_gated_presets_end_at_rest() {
        for preset in KEYFRAME_PRESETS {
            assert_eq!(preset.visible, MotionState::REST, "{}", preset.name);
        }
    }

    #[test]
    fn test_stagger_grows_with_index() {
        let delays: Vec<u32> = (0..FEATURES.len()).map(|i| STAGGER.delay(i)).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600, 700]);
    }

    #[test]
    fn test_section_reveal_is_one_shot() {
        let mut tracker = VisibilityTracker::new(InViewOptions::default());
        assert!(tracker.observe(true, 0.5));
        assert!(tracker.should_disconnect());
        assert!(!tracker.observe(false, 0.0));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_navbar_scroll_round_trip() {
        let mut nav = NavbarState::default();
        assert!(nav.on_scroll(120.0));
        assert_eq!(nav.nav_class(), "navbar scrolled");
        assert!(nav.on_scroll(0.0));
        assert_eq!(nav.nav_class(), "navbar");
    }
}
