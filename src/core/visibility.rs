//! Viewport visibility tracking
//!
//! Pure state behind the scroll-triggered entrance animations. The browser
//! side (IntersectionObserver) lives in `ui::in_view` and feeds observations
//! into a [`VisibilityTracker`].

/// Default fraction of an element that must be inside the viewport
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// One-shot latch: `NotEntered -> Entered`, never back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityLatch {
    #[default]
    NotEntered,
    Entered,
}

impl VisibilityLatch {
    /// Feed an observation. Once entered, observations are ignored.
    pub fn observe(self, in_view: bool) -> Self {
        match self {
            VisibilityLatch::Entered => VisibilityLatch::Entered,
            VisibilityLatch::NotEntered if in_view => VisibilityLatch::Entered,
            VisibilityLatch::NotEntered => VisibilityLatch::NotEntered,
        }
    }

    pub fn has_entered(self) -> bool {
        self == VisibilityLatch::Entered
    }
}

/// Observer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Fraction in `[0, 1]`
    pub threshold: f64,
    /// Latch on first entry instead of following every observation
    pub trigger_once: bool,
}

impl InViewOptions {
    /// Build options, clamping the threshold into `[0, 1]`
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            trigger_once,
        }
    }
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, true)
    }
}

/// Whether an intersection entry counts as "in view"
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Tracks the visibility of one observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTracker {
    options: InViewOptions,
    latch: VisibilityLatch,
    in_view: bool,
}

impl VisibilityTracker {
    pub fn new(options: InViewOptions) -> Self {
        Self {
            options,
            latch: VisibilityLatch::NotEntered,
            in_view: false,
        }
    }

    pub fn options(&self) -> InViewOptions {
        self.options
    }

    /// Apply an intersection observation.
    ///
    /// Returns `true` if the reported visibility changed.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        let before = self.is_visible();
        let in_view = meets_threshold(is_intersecting, ratio, self.options.threshold);
        self.in_view = in_view;
        self.latch = self.latch.observe(in_view);
        before != self.is_visible()
    }

    /// Force the element visible (platform lacks intersection support)
    pub fn force_visible(&mut self) -> bool {
        let before = self.is_visible();
        self.in_view = true;
        self.latch = VisibilityLatch::Entered;
        before != self.is_visible()
    }

    pub fn is_visible(&self) -> bool {
        if self.options.trigger_once {
            self.latch.has_entered()
        } else {
            self.in_view
        }
    }

    pub fn latch(&self) -> VisibilityLatch {
        self.latch
    }

    /// A trigger-once tracker that has latched needs no more observations
    pub fn should_disconnect(&self) -> bool {
        self.options.trigger_once && self.latch.has_entered()
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(InViewOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_only_moves_forward() {
        let latch = VisibilityLatch::default();
        assert_eq!(latch, VisibilityLatch::NotEntered);
        assert_eq!(latch.observe(false), VisibilityLatch::NotEntered);

        let entered = latch.observe(true);
        assert!(entered.has_entered());
        assert_eq!(entered.observe(false), VisibilityLatch::Entered);
        assert_eq!(entered.observe(true), VisibilityLatch::Entered);
    }

    #[test]
    fn test_threshold_requires_intersection_and_ratio() {
        assert!(meets_threshold(true, 0.2, 0.2));
        assert!(meets_threshold(true, 0.75, 0.2));
        assert!(!meets_threshold(true, 0.19, 0.2));
        assert!(!meets_threshold(false, 1.0, 0.2));
        assert!(meets_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn test_options_clamp_threshold() {
        assert_eq!(InViewOptions::new(1.5, true).threshold, 1.0);
        assert_eq!(InViewOptions::new(-0.3, true).threshold, 0.0);
        assert_eq!(InViewOptions::new(f64::NAN, false).threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_default_options() {
        let options = InViewOptions::default();
        assert_eq!(options.threshold, 0.2);
        assert!(options.trigger_once);
    }

    #[test]
    fn test_trigger_once_never_reverts() {
        let mut tracker = VisibilityTracker::default();
        assert!(!tracker.is_visible());

        assert!(!tracker.observe(true, 0.1));
        assert!(!tracker.is_visible());

        assert!(tracker.observe(true, 0.25));
        assert!(tracker.is_visible());
        assert!(tracker.should_disconnect());

        // Scrolling back out leaves it visible and reports no change
        assert!(!tracker.observe(false, 0.0));
        assert!(tracker.is_visible());
        assert!(!tracker.observe(true, 0.9));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_trigger_once_transitions_at_most_once() {
        let mut tracker = VisibilityTracker::default();
        let observations = [
            (false, 0.0),
            (true, 0.3),
            (false, 0.0),
            (true, 0.5),
            (true, 0.1),
            (false, 0.0),
        ];
        let changes = observations
            .iter()
            .filter(|(hit, ratio)| tracker.observe(*hit, *ratio))
            .count();
        assert_eq!(changes, 1);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_reversible_tracker_follows_observations() {
        let mut tracker = VisibilityTracker::new(InViewOptions::new(0.5, false));

        assert!(tracker.observe(true, 0.6));
        assert!(tracker.is_visible());
        assert!(!tracker.should_disconnect());

        assert!(tracker.observe(true, 0.4));
        assert!(!tracker.is_visible());
        assert_eq!(tracker.latch(), VisibilityLatch::Entered);
    }

    #[test]
    fn test_force_visible_fallback() {
        let mut tracker = VisibilityTracker::default();
        assert!(tracker.force_visible());
        assert!(tracker.is_visible());
        assert!(!tracker.force_visible());
        assert!(!tracker.observe(false, 0.0));
        assert!(tracker.is_visible());
    }
}
