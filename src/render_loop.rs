//! Self-rescheduling render loop with a stop handle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Something advanced and painted once per frame
pub trait Animation {
    fn frame(&mut self, time: f64);
}

/// Controls a running [`RenderLoop`]. Cloning shares the same loop.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    active: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// Stop the loop. The next scheduled frame returns without running.
    pub fn stop(&self) {
        if self.active.replace(false) {
            log::debug!("Render loop stopped after {} frames", self.frames.get());
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.get()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

/// Runs an [`Animation`] every frame until its handle is stopped
pub struct RenderLoop;

impl RenderLoop {
    pub fn start<A: Animation + 'static>(
        scheduler: Rc<dyn Scheduler>,
        animation: Rc<RefCell<A>>,
    ) -> LoopHandle {
        let handle = LoopHandle {
            active: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
        };
        schedule_next(scheduler, animation, handle.clone());
        handle
    }
}

fn schedule_next<A: Animation + 'static>(
    scheduler: Rc<dyn Scheduler>,
    animation: Rc<RefCell<A>>,
    handle: LoopHandle,
) {
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |time| {
        if !handle.is_running() {
            return;
        }
        animation.borrow_mut().frame(time);
        handle.frames.set(handle.frames.get() + 1);
        schedule_next(next, animation, handle);
    }));
}
