use log::{error, info};
use yew::prelude::*;

use crate::config::MotionConfig;
use crate::enhance;
use crate::motion::plan::MotionPlan;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub plan: MotionPlan,
    pub config: MotionConfig,
}

struct Stat {
    target: &'static str,
    suffix: &'static str,
    duration: Option<&'static str>,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: "1500", suffix: "+", duration: None, label: "Teams onboarded" },
    Stat { target: "98", suffix: "%", duration: Some("2000"), label: "Uptime last quarter" },
    Stat { target: "4.5", suffix: "", duration: Some("1000"), label: "Average rating" },
    Stat { target: "120", suffix: "k", duration: None, label: "Reports generated" },
];

const FEATURES: [(&str, &str); 3] = [
    ("Live dashboards", "Every number on one screen, refreshed as it changes."),
    ("Alerts that matter", "Set a condition once and hear about it only when it fires."),
    ("Shareable reports", "Send a link instead of a spreadsheet."),
];

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Attach effects once the markup is in the document
    {
        use_effect_with_deps(
            move |(plan, config)| {
                let motion = match enhance::init(*plan, config) {
                    Ok(motion) => Some(motion),
                    Err(e) => {
                        error!("Page motion failed to initialise: {}", e);
                        None
                    }
                };
                move || {
                    info!("Tearing down page motion");
                    drop(motion)
                }
            },
            (props.plan, props.config.clone()),
        );
    }

    html! {
        <div class="landing-page" id="top">
            <style>
                {r#"
                    html, body { margin: 0; font-family: sans-serif; }
                    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 10;
                               background: transparent; transition: background 0.3s ease, box-shadow 0.3s ease; }
                    .top-nav.navbar-scrolled { background: rgba(10, 14, 26, 0.92); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3); }
                    .nav-content { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; }
                    .nav-right { display: flex; gap: 1.5rem; align-items: center; }
                    .nav-logo, .nav-link { color: #fff; text-decoration: none; }

                    .scroll-fade-in { opacity: 0; transform: translateY(30px);
                                      transition: opacity 0.6s ease-out, transform 0.6s ease-out; }
                    .scroll-scale-in { opacity: 0; transform: scale(0.9);
                                       transition: opacity 0.6s ease-out, transform 0.6s ease-out; }
                    .scroll-fade-in.is-visible, .scroll-scale-in.is-visible { opacity: 1; transform: none; }

                    .ripple-container { position: relative; overflow: hidden; }
                    .ripple { position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.5);
                              transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; }
                    @keyframes ripple { to { transform: scale(4); opacity: 0; } }

                    @media (prefers-reduced-motion: reduce) {
                        .scroll-fade-in, .scroll-scale-in, .ripple, .top-nav { transition: none; animation: none; }
                    }
                "#}
            </style>

            <section class="hero">
                <h1 class="scroll-fade-in">{"Numbers you can act on"}</h1>
                <p class="scroll-fade-in">{"One place for the metrics your team actually reads."}</p>
                <a href="#start" class="hero-cta ripple-container">{"Start free"}</a>
            </section>

            <section class="stats" id="numbers">
                {
                    STATS.iter().map(|stat| html! {
                        <div class="stat scroll-scale-in">
                            // Text is owned by the counter enhancement, not by Yew
                            <span
                                class="stat-counter"
                                data-target={stat.target}
                                data-suffix={stat.suffix}
                                data-duration={stat.duration}
                            />
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="features" id="features">
                {
                    FEATURES.iter().map(|(title, body)| html! {
                        <div class="feature scroll-fade-in">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="cta scroll-scale-in" id="start">
                <h2>{"Ready when you are"}</h2>
                <button class="cta-button ripple-container">{"Create an account"}</button>
            </section>
        </div>
    }
}
