//! Navigation bar state
//!
//! Two independent, fully reversible flags:
//! - `scrolled`: page scrolled past [`SCROLL_THRESHOLD`]
//! - `mobile_open`: collapsed mobile menu expanded

use crate::ui::icon::icons;

/// Scroll offset (px) past which the navbar switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    pub scrolled: bool,
    pub mobile_open: bool,
}

impl NavbarState {
    /// Re-evaluate `scrolled` for a scroll offset. Returns `true` on change.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Collapse the mobile menu. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_open, false)
    }

    /// Class list for the `<nav>` element
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }

    /// Icon on the mobile toggle: close while the menu is open
    pub fn toggle_icon(&self) -> &'static str {
        if self.mobile_open { icons::X } else { icons::MENU }
    }

    /// `aria-expanded` value for the mobile toggle
    pub fn aria_expanded(&self) -> &'static str {
        if self.mobile_open { "true" } else { "false" }
    }

    /// Class list for the collapsible mobile menu
    pub fn mobile_menu_class(&self) -> &'static str {
        if self.mobile_open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavbarState::default();
        assert!(!state.scrolled);
        assert!(!state.mobile_open);
        assert_eq!(state.nav_class(), "navbar");
        assert_eq!(state.mobile_menu_class(), "mobile-menu");
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_scrolled_is_reversible() {
        let mut state = NavbarState::default();

        assert!(state.on_scroll(120.0));
        assert!(state.scrolled);
        assert_eq!(state.nav_class(), "navbar scrolled");

        assert!(!state.on_scroll(300.0));
        assert!(state.scrolled);

        assert!(state.on_scroll(10.0));
        assert!(!state.scrolled);
        assert_eq!(state.nav_class(), "navbar");
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..7 {
            let mut state = NavbarState::default();
            for _ in 0..n {
                state.toggle_menu();
            }
            assert_eq!(state.mobile_open, n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_and_close() {
        let mut state = NavbarState::default();
        state.toggle_menu();
        assert_eq!(state.mobile_menu_class(), "mobile-menu open");

        assert!(state.close_menu());
        assert!(!state.mobile_open);
        assert!(!state.close_menu());
    }

    #[test]
    fn test_toggle_swaps_icon_and_menu_visibility() {
        let mut state = NavbarState::default();
        assert_eq!(state.toggle_icon(), icons::MENU);
        assert_eq!(state.aria_expanded(), "false");

        state.toggle_menu();
        assert_eq!(state.toggle_icon(), icons::X);
        assert_eq!(state.aria_expanded(), "true");
        assert_eq!(state.mobile_menu_class(), "mobile-menu open");

        state.toggle_menu();
        assert_eq!(state.toggle_icon(), icons::MENU);
        assert_eq!(state.aria_expanded(), "false");
        assert_eq!(state.mobile_menu_class(), "mobile-menu");
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = NavbarState::default();
        state.toggle_menu();
        state.on_scroll(400.0);
        assert!(state.mobile_open && state.scrolled);

        state.on_scroll(0.0);
        assert!(state.mobile_open);
        assert!(!state.scrolled);
    }
}
