/// Scrolled / not-scrolled state of the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarState {
    threshold: f64,
    scrolled: bool,
}

impl NavbarState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds a new scroll offset. Returns the new state only when it flipped.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

/// Lets at most one frame callback be pending at a time, so a burst of scroll
/// events costs one update per rendered frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True if the caller should schedule a frame now.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback once the work is done.
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_around_threshold() {
        let mut nav = NavbarState::new(50.0);
        assert_eq!(nav.update(0.0), None);
        assert!(!nav.is_scrolled());

        assert_eq!(nav.update(60.0), Some(true));
        assert!(nav.is_scrolled());

        assert_eq!(nav.update(40.0), Some(false));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut nav = NavbarState::new(50.0);
        assert_eq!(nav.update(50.0), None);
        assert_eq!(nav.update(50.5), Some(true));
        assert_eq!(nav.update(50.0), Some(false));
    }

    #[test]
    fn repeated_offsets_report_nothing() {
        let mut nav = NavbarState::new(50.0);
        nav.update(300.0);
        assert_eq!(nav.update(400.0), None);
        assert_eq!(nav.update(51.0), None);
    }

    #[test]
    fn gate_coalesces_until_frame_runs() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());

        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn gate_reopens_after_failed_schedule() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        // Scheduling the frame failed, so the handler releases the gate itself
        gate.complete();
        assert!(gate.request());
        assert!(!gate.request());
    }
}
