//! Effects attached to whatever markup carries the marker classes
//! (`stat-counter`, `scroll-fade-in`, `scroll-scale-in`, `ripple-container`).

pub mod counters;
pub mod reveal;
pub mod ripple;
pub mod smooth_scroll;

use log::{info, warn};

use crate::config::MotionConfig;
use crate::dom::{self, listener::Listener, observer::ViewportObserver};
use crate::error::Result;
use crate::motion::plan::MotionPlan;

/// Keeps observers and listeners alive for as long as the page is mounted.
#[derive(Default)]
pub struct PageMotion {
    observers: Vec<ViewportObserver>,
    listeners: Vec<Listener>,
}

impl PageMotion {
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

pub fn init(plan: MotionPlan, config: &MotionConfig) -> Result<PageMotion> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let mut motion = PageMotion::default();

    if plan.animates() {
        match counters::observe(&window, &document, config) {
            Ok(observer) => motion.observers.push(observer),
            Err(e) => {
                warn!("Counter observer failed, showing final values: {}", e);
                counters::finish_all(&document, config)?;
            }
        }
        match reveal::observe(&document, config) {
            Ok(observer) => motion.observers.push(observer),
            Err(e) => {
                warn!("Reveal observer failed, showing everything: {}", e);
                reveal::show_all(&document)?;
            }
        }
    } else {
        info!(
            "Showing final state (reduced motion: {}, observer: {})",
            plan.reduced_motion, plan.observer_supported
        );
        counters::finish_all(&document, config)?;
        reveal::show_all(&document)?;
    }

    if plan.interactive() {
        motion.listeners.extend(ripple::attach(&document, config)?);
        if config.smooth_scroll {
            motion.listeners.extend(smooth_scroll::attach(&document)?);
        }
    }

    info!(
        "Page motion ready: {} observers, {} listeners",
        motion.observer_count(),
        motion.listener_count()
    );
    Ok(motion)
}
