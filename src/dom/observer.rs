use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::Result;

/// Feature check for `IntersectionObserver` on the global object.
pub fn supported(window: &Window) -> bool {
    Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` and its callback. Dropping it disconnects
/// the observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// `on_visible` runs for every observed element that starts intersecting
    /// at `threshold` or more.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<Self>
    where
        F: FnMut(Element, &IntersectionObserver) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            on_visible(entry.target(), &observer);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
