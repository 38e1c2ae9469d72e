/// Viewport width below which the site switches to its mobile layout.
pub const MOBILE_BREAKPOINT: f64 = crate::config::BREAKPOINTS.md;

/// Tracks whether the viewport is narrower than a threshold.
///
/// Starts out wide so the first paint matches what a server render produces;
/// the first real measurement may flip it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveObserver {
    threshold: f64,
    narrow: bool,
}

impl ResponsiveObserver {
    /// Observer for `threshold` that reads wide until the first measurement.
    pub fn new(threshold: f64) -> Self {
        ResponsiveObserver {
            threshold,
            narrow: false,
        }
    }

    /// Whether the last measured width was below the threshold.
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Recomputes from a viewport width. Returns true when the value changed.
    pub fn observe(&mut self, viewport_width: f64) -> bool {
        let narrow = viewport_width < self.threshold;
        let changed = narrow != self.narrow;
        self.narrow = narrow;
        changed
    }
}

impl Default for ResponsiveObserver {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_start_wide() {
        assert!(!ResponsiveObserver::new(768.0).is_narrow());
    }

    #[test]
    fn can_turn_narrow_below_threshold() {
        let mut observer = ResponsiveObserver::new(768.0);

        observer.observe(500.0);
        assert!(observer.is_narrow());

        observer.observe(1024.0);
        assert!(!observer.is_narrow());
    }

    #[test]
    fn cannot_be_narrow_at_threshold_itself() {
        let mut observer = ResponsiveObserver::default();

        observer.observe(768.0);

        assert!(!observer.is_narrow());
    }

    #[test]
    fn can_report_only_flips() {
        let mut observer = ResponsiveObserver::new(768.0);

        assert!(!observer.observe(1200.0));
        assert!(observer.observe(400.0));
        assert!(!observer.observe(390.0));
        assert!(observer.observe(800.0));
    }
}
