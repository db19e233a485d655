use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::Result;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `step` once per animation frame with the frame timestamp until it
/// returns false. There is no way to stop it from the outside.
pub fn animate<F>(window: &Window, mut step: F) -> Result<()>
where
    F: FnMut(f64) -> bool + 'static,
{
    // The closure reschedules itself through the slot and empties the slot
    // on its last frame, which breaks the Rc cycle.
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !step(now) {
            next.borrow_mut().take();
            return;
        }
        let scheduled = match next.borrow().as_ref() {
            Some(callback) => win
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .map(|_| ()),
            None => Ok(()),
        };
        if let Err(e) = scheduled {
            warn!("Failed to schedule animation frame: {:?}", e);
            next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let first = match slot.borrow().as_ref() {
        Some(callback) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(|_| ()),
        None => Ok(()),
    };
    if let Err(e) = first {
        slot.borrow_mut().take();
        return Err(e.into());
    }
    Ok(())
}

/// Runs `f` on the next animation frame.
pub fn next_frame<F>(window: &Window, f: F) -> Result<()>
where
    F: FnOnce(f64) + 'static,
{
    let callback = Closure::once_into_js(f);
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}
