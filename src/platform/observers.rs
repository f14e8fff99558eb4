//! Intersection observers and timers: reveal, counters, typewriter

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use super::listeners::listen;
use crate::consts::COUNTER_THRESHOLD;
use crate::counter::{self, COUNTER_SELECTOR, TARGET_ATTRIBUTE, parse_target};
use crate::error::FxError;
use crate::reveal::{
    REVEAL_SELECTOR, RevealController, RevealTrigger, VISIBLE_CLASS, observer_root_margin,
};
use crate::scheduler::{Scheduler, TimerControl};
use crate::ui::typewriter::{TYPING_SELECTOR, type_text};

type EntryCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// Observe `elements`, calling `on_enter` with the index of each one whose
/// entry passes `accept`. The observer lives for the rest of the page.
fn observe(
    elements: &[Element],
    init: &IntersectionObserverInit,
    accept: impl Fn(&IntersectionObserverEntry) -> bool + 'static,
    mut on_enter: impl FnMut(usize, &IntersectionObserver) + 'static,
) -> Result<(), FxError> {
    let targets = elements.to_vec();
    let callback = Closure::<EntryCallback>::new(move |entries: js_sys::Array, obs| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !accept(&entry) {
                continue;
            }
            let target = entry.target();
            if let Some(index) = targets.iter().position(|el| *el == target) {
                on_enter(index, &obs);
            }
        }
    });
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

fn reveal_at(
    state: &Rc<RefCell<RevealController>>,
    elements: &[Element],
    index: usize,
) -> bool {
    if !state.borrow_mut().reveal(index) {
        return false;
    }
    dom::set_class(&elements[index], VISIBLE_CLASS, true);
    true
}

/// Fade in `.reveal` elements as they scroll into view
pub fn attach_reveal(document: &Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let state = Rc::new(RefCell::new(RevealController::new(elements.len())));
    let elements = Rc::new(elements);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&observer_root_margin());
    {
        let (state, els) = (state.clone(), elements.clone());
        let in_zone = |entry: &IntersectionObserverEntry| {
            let (_, vh) = dom::viewport_size();
            entry.is_intersecting()
                && RevealTrigger::Observer.in_zone(entry.bounding_client_rect().top(), vh)
        };
        let observed = observe(&elements, &init, in_zone, move |index, obs| {
            if reveal_at(&state, &els, index) {
                obs.unobserve(&els[index]);
            }
        });
        if let Err(e) = observed {
            log::info!("Reveal observer unavailable, scroll fallback only: {}", e);
        }
    }

    let scan = {
        let (state, elements) = (state.clone(), elements.clone());
        move || {
            if state.borrow().pending() == 0 {
                return;
            }
            let (_, vh) = dom::viewport_size();
            let hits = state
                .borrow_mut()
                .scan(vh, RevealTrigger::ScrollFallback, |i| {
                    elements[i].get_bounding_client_rect().top()
                });
            for i in hits {
                dom::set_class(&elements[i], VISIBLE_CLASS, true);
            }
        }
    };

    if let Ok(window) = dom::window() {
        for name in ["scroll", "load"] {
            let scan = scan.clone();
            listen(&window, name, move |_| scan());
        }
    }
    scan();
    log::debug!("{} reveal element(s)", elements.len());
}

/// Count `.counter` elements up to their `data-target` once mostly visible
pub fn attach_counters(document: &Document, scheduler: &Rc<dyn Scheduler>, period_ms: u32) {
    let elements = dom::query_all(document, COUNTER_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let count = elements.len();
    let started = Rc::new(RefCell::new(RevealController::new(count)));
    let elements = Rc::new(elements);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(COUNTER_THRESHOLD));
    let scheduler = scheduler.clone();
    let els = elements.clone();
    let mostly_visible = |entry: &IntersectionObserverEntry| {
        counter::should_start(entry.is_intersecting(), entry.intersection_ratio())
    };
    let observed = observe(&elements, &init, mostly_visible, move |index, obs| {
        if !started.borrow_mut().reveal(index) {
            return;
        }
        let el = els[index].clone();
        obs.unobserve(&el);
        let target = parse_target(el.get_attribute(TARGET_ATTRIBUTE).as_deref());
        el.set_text_content(Some("0"));
        log::debug!("Counter {} -> {}", index, target);
        counter::animate(scheduler.as_ref(), target, period_ms, move |value| {
            if !el.is_connected() {
                return TimerControl::Stop;
            }
            el.set_text_content(Some(&value.to_string()));
            TimerControl::Continue
        });
    });
    match observed {
        Ok(()) => log::debug!("{} counter(s)", count),
        Err(e) => log::warn!("Counters disabled: {}", e),
    }
}

/// Clear the intro line and type it back in
pub fn attach_typewriter(
    document: &Document,
    scheduler: &Rc<dyn Scheduler>,
    period_ms: u32,
) -> Result<(), FxError> {
    let span = document
        .query_selector(TYPING_SELECTOR)?
        .ok_or_else(|| FxError::MissingElement(TYPING_SELECTOR.into()))?;
    let text = span.text_content().unwrap_or_default();
    span.set_text_content(Some(""));
    type_text(scheduler.as_ref(), &text, period_ms, move |prefix| {
        span.set_text_content(Some(prefix));
    });
    Ok(())
}
