use log::{debug, warn};
use web_sys::Document;

use crate::config::MotionConfig;
use crate::dom::{self, observer::ViewportObserver};
use crate::error::Result;

pub const REVEAL_SELECTOR: &str = ".scroll-fade-in, .scroll-scale-in";
pub const VISIBLE_CLASS: &str = "is-visible";

pub fn show_all(document: &Document) -> Result<()> {
    for element in dom::query_all(document, REVEAL_SELECTOR)? {
        element.class_list().add_1(VISIBLE_CLASS)?;
    }
    Ok(())
}

/// Reveals each element once, the first time it scrolls into view.
pub fn observe(document: &Document, config: &MotionConfig) -> Result<ViewportObserver> {
    let observer = ViewportObserver::new(
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        |target, observer| {
            if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                warn!("Reveal failed: {:?}", e);
            }
            observer.unobserve(&target);
        },
    )?;

    let elements = dom::query_all(document, REVEAL_SELECTOR)?;
    for element in &elements {
        observer.observe(element);
    }
    debug!("Observing {} reveal elements", elements.len());
    Ok(observer)
}
