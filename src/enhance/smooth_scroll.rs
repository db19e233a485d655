use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, listener::Listener};
use crate::error::Result;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Anchors that point at a section, i.e. anything but a bare `#`.
pub fn is_section_link(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

pub fn attach(document: &Document) -> Result<Vec<Listener>> {
    if let Some(root) = document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    {
        root.style().set_property("scroll-behavior", "smooth")?;
    }

    dom::query_all(document, ANCHOR_SELECTOR)?
        .into_iter()
        .map(|anchor| {
            let doc = document.clone();
            let link = anchor.clone();
            Listener::new(&anchor, "click", move |event| {
                let href = match link.get_attribute("href") {
                    Some(href) if is_section_link(&href) => href,
                    _ => return,
                };
                // An href like "#1st" is not a valid selector; treat it as no target.
                if let Ok(Some(section)) = doc.query_selector(&href) {
                    event.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
            })
        })
        .collect()
}
