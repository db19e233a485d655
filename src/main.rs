use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod enhance;
mod error;
mod motion {
    pub mod counter;
    pub mod navbar;
    pub mod plan;
    pub mod ripple;
}
mod components {
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use config::MotionConfig;
use motion::plan::MotionPlan;
use pages::landing::Landing;

/// Reads the motion preference and observer support once for the page load.
fn detect_plan() -> MotionPlan {
    match dom::window() {
        Ok(window) => MotionPlan::new(
            dom::prefers_reduced_motion(&window),
            dom::observer::supported(&window),
        ),
        Err(_) => MotionPlan::new(true, false),
    }
}

#[function_component]
fn App() -> Html {
    let config = use_state(MotionConfig::load);
    let plan = use_state(detect_plan);

    html! {
        <>
            <Nav threshold={config.navbar_threshold_px} track_scroll={plan.interactive()} />
            <Landing plan={*plan} config={(*config).clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
