use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::dom::{self, frame, listener::Listener};
use crate::motion::navbar::{FrameGate, NavbarState};

pub const SCROLLED_CLASS: &str = "navbar-scrolled";

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub threshold: f64,
    /// False under reduced motion: the bar then never changes style.
    pub track_scroll: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |(threshold, track_scroll)| {
                let mut listener = None;
                if *track_scroll {
                    match dom::window() {
                        Ok(window) => {
                            let state = Rc::new(RefCell::new(NavbarState::new(*threshold)));
                            let gate = Rc::new(RefCell::new(FrameGate::default()));

                            let update = {
                                let window = window.clone();
                                let state = state.clone();
                                let is_scrolled = is_scrolled.clone();
                                move || {
                                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                                    if let Some(scrolled) = state.borrow_mut().update(scroll_y) {
                                        is_scrolled.set(scrolled);
                                    }
                                }
                            };
                            update();

                            let win = window.clone();
                            match Listener::new(&window, "scroll", move |_| {
                                if !gate.borrow_mut().request() {
                                    return;
                                }
                                let frame_gate = gate.clone();
                                let update = update.clone();
                                let scheduled = frame::next_frame(&win, move |_| {
                                    update();
                                    frame_gate.borrow_mut().complete();
                                });
                                if let Err(e) = scheduled {
                                    warn!("Navbar update not scheduled: {}", e);
                                    gate.borrow_mut().complete();
                                }
                            }) {
                                Ok(l) => listener = Some(l),
                                Err(e) => warn!("Navbar scroll listener failed: {}", e),
                            }
                        }
                        Err(e) => warn!("Navbar disabled: {}", e),
                    }
                }
                move || drop(listener)
            },
            (props.threshold, props.track_scroll),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| SCROLLED_CLASS))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">{"Meridian"}</a>
                <div class="nav-right">
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <a href="#numbers" class="nav-link">{"Numbers"}</a>
                    <a href="#start" class="nav-login-button ripple-container">{"Get started"}</a>
                </div>
            </div>
        </nav>
    }
}
