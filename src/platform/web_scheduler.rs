//! Browser scheduler backed by `requestAnimationFrame` and `setInterval`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::scheduler::{FrameCallback, IntervalTask, Scheduler, TimerControl};

#[derive(Debug, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // One-shot closure that frees itself after running
        let closure = Closure::once_into_js(move |time: f64| callback(time));
        if window
            .request_animation_frame(closure.unchecked_ref())
            .is_err()
        {
            log::warn!("requestAnimationFrame failed");
        }
    }

    fn set_interval(&self, period_ms: u32, mut task: IntervalTask) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // The closure must outlive each tick, so it is parked in a slot that
        // the final tick empties (after the interval is cleared).
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let tick_slot = slot.clone();
        let tick_handle = handle.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if task() == TimerControl::Continue {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(id) = tick_handle.borrow_mut().take() {
                window.clear_interval_with_handle(id);
            }
            // Drop the closure outside of its own invocation
            let release = tick_slot.clone();
            let drop_later = Closure::once_into_js(move || {
                release.borrow_mut().take();
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                drop_later.unchecked_ref(),
                0,
            );
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(id) => {
                *handle.borrow_mut() = Some(id);
                *slot.borrow_mut() = Some(closure);
            }
            Err(_) => log::warn!("setInterval failed"),
        }
    }
}
