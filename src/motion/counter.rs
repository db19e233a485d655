use crate::error::{MotionError, Result};

/// Quadratic ease-out: fast start, slow finish.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Fraction of the animation that has elapsed, clamped to [0, 1].
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// What a counter needs to know about the element it animates.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub duration_ms: u32,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(target: f64, duration_ms: u32, suffix: impl Into<String>) -> Self {
        Self {
            target,
            duration_ms,
            suffix: suffix.into(),
        }
    }

    /// Builds a spec from the raw `data-target`, `data-suffix` and
    /// `data-duration` attribute values.
    pub fn from_attributes(
        target: Option<&str>,
        suffix: Option<&str>,
        duration: Option<&str>,
        default_duration_ms: u32,
    ) -> Result<Self> {
        let raw = target.ok_or(MotionError::MissingAttribute("data-target"))?;
        let target = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| MotionError::InvalidTarget(raw.to_string()))?;

        let duration_ms = duration
            .and_then(parse_leading_int)
            .filter(|ms| *ms > 0)
            .and_then(|ms| u32::try_from(ms).ok())
            .unwrap_or(default_duration_ms);

        Ok(Self::new(target, duration_ms, suffix.unwrap_or("")))
    }

    pub fn has_fraction(&self) -> bool {
        self.target.fract() != 0.0
    }

    /// Text shown for a raw (un-suffixed) value.
    pub fn format(&self, value: f64) -> String {
        if self.has_fraction() {
            // `+ 0.0` turns -0.0 into 0.0 so we never print "-0.0"
            format!("{:.1}{}", value + 0.0, self.suffix)
        } else {
            format!("{:.0}{}", value.floor() + 0.0, self.suffix)
        }
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        self.target * ease_out_quad(progress.clamp(0.0, 1.0))
    }

    pub fn text_at(&self, progress: f64) -> String {
        self.format(self.value_at(progress))
    }

    /// Text before the first frame, written when the counter is set up.
    pub fn initial_text(&self) -> String {
        self.text_at(0.0)
    }

    pub fn final_text(&self) -> String {
        self.format(self.target)
    }
}

/// Integer prefix of `raw`, the way `data-duration="3000ms"` is commonly
/// written in markup.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Idle,
    /// `started_at` is filled in by the first frame after `start`.
    Running { started_at: Option<f64> },
    Completed,
}

/// One rendered frame of a counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            phase: CounterPhase::Idle,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Moves idle -> running. Returns false (and changes nothing) if the
    /// counter was already started.
    pub fn start(&mut self) -> bool {
        match self.phase {
            CounterPhase::Idle => {
                self.phase = CounterPhase::Running { started_at: None };
                true
            }
            _ => false,
        }
    }

    /// Samples the counter at frame timestamp `now_ms`. Returns `None` unless
    /// the counter is running.
    pub fn frame(&mut self, now_ms: f64) -> Option<CounterFrame> {
        let started_at = match self.phase {
            CounterPhase::Running { started_at } => started_at.unwrap_or(now_ms),
            _ => return None,
        };

        let fraction = progress(now_ms - started_at, f64::from(self.spec.duration_ms));
        let done = fraction >= 1.0;
        self.phase = if done {
            CounterPhase::Completed
        } else {
            CounterPhase::Running {
                started_at: Some(started_at),
            }
        };

        Some(CounterFrame {
            text: self.spec.text_at(fraction),
            done,
        })
    }

    /// Skips straight to the completed state and returns the final text.
    pub fn initial_text(&self) -> String {
        self.spec.initial_text()
    }

    pub fn finish(&mut self) -> String {
        self.phase = CounterPhase::Completed;
        self.spec.final_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CounterAnimation, step_ms: f64) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        let mut now = 1_000.0;
        while let Some(frame) = counter.frame(now) {
            let done = frame.done;
            frames.push(frame);
            if done {
                break;
            }
            now += step_ms;
        }
        frames
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-10.0, 100.0), 0.0);
        assert_eq!(progress(50.0, 100.0), 0.5);
        assert_eq!(progress(5_000.0, 100.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn stat_with_plus_suffix() {
        let mut counter = CounterAnimation::new(CounterSpec::new(1500.0, 2500, "+"));
        assert!(counter.start());

        let first = counter.frame(320.0).unwrap();
        assert_eq!(first.text, "0+");
        assert!(!first.done);

        let last = counter.frame(320.0 + 2500.0).unwrap();
        assert_eq!(last.text, "1500+");
        assert!(last.done);
        assert_eq!(counter.phase(), CounterPhase::Completed);
        assert_eq!(counter.frame(4000.0), None);
    }

    #[test]
    fn fractional_target_keeps_one_decimal() {
        let mut counter = CounterAnimation::new(CounterSpec::new(4.5, 1000, ""));
        counter.start();
        let frames = run_to_end(&mut counter, 16.0);

        assert_eq!(frames.last().unwrap().text, "4.5");
        for frame in &frames {
            let (_, decimals) = frame.text.split_once('.').expect("one decimal place");
            assert_eq!(decimals.len(), 1, "{}", frame.text);
        }
    }

    #[test]
    fn integral_target_shows_integers_and_never_overshoots() {
        let mut counter = CounterAnimation::new(CounterSpec::new(98.0, 700, "%"));
        counter.start();
        let frames = run_to_end(&mut counter, 16.7);

        let mut previous = -1;
        for frame in &frames {
            let number: i64 = frame.text.trim_end_matches('%').parse().unwrap();
            assert!(number >= previous, "values must not decrease");
            assert!(number <= 98);
            previous = number;
        }
        assert_eq!(frames.last().unwrap().text, "98%");
    }

    #[test]
    fn exact_target_at_duration_for_many_inputs() {
        for (target, duration) in [(1.0, 1), (0.0, 500), (12.3, 900), (250000.0, 3000)] {
            let spec = CounterSpec::new(target, duration, "");
            let mut counter = CounterAnimation::new(spec.clone());
            counter.start();
            counter.frame(0.0);
            let frame = counter.frame(f64::from(duration)).unwrap();
            assert!(frame.done);
            assert_eq!(frame.text, spec.final_text());
        }
    }

    #[test]
    fn second_start_does_not_restart() {
        let mut counter = CounterAnimation::new(CounterSpec::new(100.0, 1000, ""));
        assert!(counter.start());
        counter.frame(0.0);
        let mid = counter.frame(500.0).unwrap();

        assert!(!counter.start());
        assert_eq!(
            counter.phase(),
            CounterPhase::Running {
                started_at: Some(0.0)
            }
        );
        let later = counter.frame(600.0).unwrap();
        assert!(later.text.parse::<i64>().unwrap() >= mid.text.parse::<i64>().unwrap());

        counter.frame(1000.0);
        assert!(!counter.start());
        assert_eq!(counter.phase(), CounterPhase::Completed);
    }

    #[test]
    fn idle_counter_renders_nothing() {
        let mut counter = CounterAnimation::new(CounterSpec::new(10.0, 100, ""));
        assert_eq!(counter.frame(50.0), None);
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn finish_jumps_to_final_text() {
        let mut counter = CounterAnimation::new(CounterSpec::new(2.5, 1000, "x"));
        assert_eq!(counter.finish(), "2.5x");
        assert!(!counter.start());
    }

    #[test]
    fn negative_zero_is_not_printed() {
        let spec = CounterSpec::new(-3.5, 1000, "");
        assert_eq!(spec.text_at(0.0), "0.0");
        assert_eq!(spec.final_text(), "-3.5");
    }

    #[test]
    fn huge_integral_targets_are_not_truncated() {
        let spec = CounterSpec::from_attributes(Some("1e19"), None, None, 2500).unwrap();
        assert_eq!(spec.final_text(), "10000000000000000000");

        let spec = CounterSpec::from_attributes(Some("-1e19"), Some("+"), None, 2500).unwrap();
        assert_eq!(spec.final_text(), "-10000000000000000000+");
        assert_eq!(spec.initial_text(), "0+");
    }

    #[test]
    fn initial_text_is_zero_with_suffix() {
        assert_eq!(CounterSpec::new(1500.0, 2500, "+").initial_text(), "0+");
        assert_eq!(CounterSpec::new(4.5, 1000, "").initial_text(), "0.0");
    }

    #[test]
    fn attributes_with_defaults() {
        let spec = CounterSpec::from_attributes(Some("1500"), None, None, 2500).unwrap();
        assert_eq!(spec, CounterSpec::new(1500.0, 2500, ""));

        let spec = CounterSpec::from_attributes(Some(" 4.5 "), Some("k"), Some("1200"), 2500)
            .unwrap();
        assert_eq!(spec, CounterSpec::new(4.5, 1200, "k"));
    }

    #[test]
    fn duration_attribute_fallbacks() {
        let duration = |raw: &str| {
            CounterSpec::from_attributes(Some("1"), None, Some(raw), 2500)
                .unwrap()
                .duration_ms
        };
        assert_eq!(duration("3000ms"), 3000);
        assert_eq!(duration("0"), 2500);
        assert_eq!(duration("-40"), 2500);
        assert_eq!(duration("fast"), 2500);
        assert_eq!(duration(""), 2500);
    }

    #[test]
    fn bad_targets_are_rejected() {
        assert!(matches!(
            CounterSpec::from_attributes(None, None, None, 2500),
            Err(MotionError::MissingAttribute("data-target"))
        ));
        assert!(matches!(
            CounterSpec::from_attributes(Some("lots"), None, None, 2500),
            Err(MotionError::InvalidTarget(raw)) if raw == "lots"
        ));
        assert!(matches!(
            CounterSpec::from_attributes(Some("inf"), None, None, 2500),
            Err(MotionError::InvalidTarget(_))
        ));
    }
}
