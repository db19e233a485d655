use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::{Document, Element, Window};

use crate::config::MotionConfig;
use crate::dom::{self, frame, observer::ViewportObserver};
use crate::error::Result;
use crate::motion::counter::{CounterAnimation, CounterSpec};

pub const COUNTER_SELECTOR: &str = ".stat-counter";

type SharedCounter = Rc<RefCell<CounterAnimation>>;

/// Reads every `.stat-counter` on the page. Elements with a missing or
/// unparsable `data-target` are logged and left alone.
pub fn collect(document: &Document, config: &MotionConfig) -> Result<Vec<(Element, CounterAnimation)>> {
    let mut counters = Vec::new();
    for element in dom::query_all(document, COUNTER_SELECTOR)? {
        let target = element.get_attribute("data-target");
        let suffix = element.get_attribute("data-suffix");
        let duration = element.get_attribute("data-duration");

        match CounterSpec::from_attributes(
            target.as_deref(),
            suffix.as_deref(),
            duration.as_deref(),
            config.counter_duration_ms,
        ) {
            Ok(spec) => counters.push((element, CounterAnimation::new(spec))),
            Err(e) => warn!("Skipping counter {:?}: {}", element.id(), e),
        }
    }
    Ok(counters)
}

/// Puts every counter in its final state without issuing any frames.
pub fn finish_all(document: &Document, config: &MotionConfig) -> Result<()> {
    for (element, mut counter) in collect(document, config)? {
        element.set_text_content(Some(&counter.finish()));
    }
    Ok(())
}

/// Starts `counter` if it is still idle and drives it to completion.
fn start(window: &Window, element: Element, counter: SharedCounter) {
    if !counter.borrow_mut().start() {
        return;
    }
    debug!("Counter {:?} started", element.id());

    let step_counter = counter.clone();
    let result = frame::animate(window, move |now| {
        match step_counter.borrow_mut().frame(now) {
            Some(frame) => {
                element.set_text_content(Some(&frame.text));
                !frame.done
            }
            None => false,
        }
    });
    if let Err(e) = result {
        warn!("Counter animation could not start: {}", e);
    }
}

/// Watches every counter and starts it the first time it is at least
/// `counter_threshold` visible.
pub fn observe(window: &Window, document: &Document, config: &MotionConfig) -> Result<ViewportObserver> {
    let counters: Rc<Vec<(Element, SharedCounter)>> = Rc::new(
        collect(document, config)?
            .into_iter()
            .map(|(element, counter)| {
                element.set_text_content(Some(&counter.initial_text()));
                (element, Rc::new(RefCell::new(counter)))
            })
            .collect(),
    );

    let win = window.clone();
    let lookup = counters.clone();
    let observer = ViewportObserver::new(config.counter_threshold, None, move |target, observer| {
        if let Some((element, counter)) = lookup.iter().find(|(element, _)| *element == target) {
            observer.unobserve(element);
            start(&win, element.clone(), counter.clone());
        }
    })?;

    for (element, _) in counters.iter() {
        observer.observe(element);
    }
    debug!("Observing {} counters", counters.len());
    Ok(observer)
}
