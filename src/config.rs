use log::{warn, Level};
use serde::Deserialize;

use crate::error::{MotionError, Result};

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "motion-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty in local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every effect on the page. Any field may be left out of the
/// JSON block and keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub counter_duration_ms: u32,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub navbar_threshold_px: f64,
    pub ripple_lifetime_ms: u32,
    pub smooth_scroll: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2500,
            counter_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            navbar_threshold_px: 50.0,
            ripple_lifetime_ms: 600,
            smooth_scroll: true,
        }
    }
}

impl MotionConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: MotionConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.counter_duration_ms == 0 {
            return Err(MotionError::Config(
                "counter_duration_ms must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("counter_threshold", self.counter_threshold),
            ("reveal_threshold", self.reveal_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotionError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(MotionError::Config(format!(
                "reveal_root_margin must be one to four px or % lengths, got {:?}",
                self.reveal_root_margin
            )));
        }
        if !self.navbar_threshold_px.is_finite() || self.navbar_threshold_px < 0.0 {
            return Err(MotionError::Config(format!(
                "navbar_threshold_px must be a non-negative number, got {}",
                self.navbar_threshold_px
            )));
        }
        Ok(())
    }

    /// Reads the config block from the current document. A missing block means
    /// defaults; a broken one is logged and also means defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring #{} block: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

/// Accepts what `IntersectionObserver` accepts as `rootMargin`: one to four
/// lengths, each in `px` or `%`.
fn is_root_margin(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part
                .strip_suffix("px")
                .or_else(|| part.strip_suffix('%'));
            matches!(number.map(str::parse::<f64>), Some(Ok(n)) if n.is_finite())
        })
}
