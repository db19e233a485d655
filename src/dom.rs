pub mod frame;
pub mod listener;
pub mod observer;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::{MotionError, Result};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(MotionError::NoDocument)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
