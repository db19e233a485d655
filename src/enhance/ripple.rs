use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::config::MotionConfig;
use crate::dom::{self, listener::Listener};
use crate::error::{MotionError, Result};
use crate::motion::ripple::{Bounds, RippleGeometry};

pub const RIPPLE_CONTAINER_SELECTOR: &str = ".ripple-container";
pub const RIPPLE_CLASS: &str = "ripple";

fn spawn(document: &Document, container: &Element, event: &MouseEvent, lifetime_ms: u32) -> Result<()> {
    let rect = container.get_bounding_client_rect();
    let geometry = RippleGeometry::at(
        Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let ripple = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MotionError::Js("ripple span is not an HtmlElement".to_string()))?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;
    let style = ripple.style();
    for (property, value) in geometry.style() {
        style.set_property(property, &value)?;
    }
    container.append_child(&ripple)?;

    Timeout::new(lifetime_ms, move || ripple.remove()).forget();
    Ok(())
}

/// Adds a click listener to every `.ripple-container`.
pub fn attach(document: &Document, config: &MotionConfig) -> Result<Vec<Listener>> {
    let lifetime_ms = config.ripple_lifetime_ms;
    dom::query_all(document, RIPPLE_CONTAINER_SELECTOR)?
        .into_iter()
        .map(|container| {
            let doc = document.clone();
            let target = container.clone();
            Listener::new(&container, "click", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    if let Err(e) = spawn(&doc, &target, event, lifetime_ms) {
                        warn!("Ripple failed: {}", e);
                    }
                }
            })
        })
        .collect()
}
