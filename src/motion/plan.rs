/// Which effects run on this page load. Decided once at start-up and never
/// re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPlan {
    pub reduced_motion: bool,
    pub observer_supported: bool,
}

impl MotionPlan {
    pub fn new(reduced_motion: bool, observer_supported: bool) -> Self {
        Self {
            reduced_motion,
            observer_supported,
        }
    }

    /// Counters count up and reveals wait for the viewport. Otherwise both
    /// are put in their final state straight away.
    pub fn animates(&self) -> bool {
        !self.reduced_motion && self.observer_supported
    }

    /// Navbar scroll state, ripples and smooth anchor scrolling.
    pub fn interactive(&self) -> bool {
        !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_motion() {
        let plan = MotionPlan::new(false, true);
        assert!(plan.animates());
        assert!(plan.interactive());
    }

    #[test]
    fn reduced_motion_turns_everything_off() {
        for supported in [true, false] {
            let plan = MotionPlan::new(true, supported);
            assert!(!plan.animates());
            assert!(!plan.interactive());
        }
    }

    #[test]
    fn missing_observer_keeps_interaction() {
        let plan = MotionPlan::new(false, false);
        assert!(!plan.animates());
        assert!(plan.interactive());
    }
}
