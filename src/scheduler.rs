//! Frame and interval scheduling
//!
//! Effects never call `requestAnimationFrame` or `setInterval` directly; they
//! go through a [`Scheduler`]. The browser implementation lives in
//! `platform::web_scheduler`, and [`ManualScheduler`] drives tests with a
//! fake clock.

use std::cell::{Cell, RefCell};

/// Callback for one animation frame, given the frame timestamp in ms
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Interval task; its return value decides whether it keeps running
pub type IntervalTask = Box<dyn FnMut() -> TimerControl>;

/// Returned by interval tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    Continue,
    Stop,
}

pub trait Scheduler {
    /// Run `callback` once on the next frame
    fn request_frame(&self, callback: FrameCallback);

    /// Run `task` every `period_ms` until it returns [`TimerControl::Stop`]
    fn set_interval(&self, period_ms: u32, task: IntervalTask);
}

struct ManualInterval {
    period: f64,
    next_due: f64,
    task: IntervalTask,
}

/// Deterministic scheduler for tests and the native demo.
///
/// Frames run only when [`ManualScheduler::run_frame`] is called; intervals
/// fire as [`ManualScheduler::advance`] moves the clock.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<f64>,
    frames: RefCell<Vec<FrameCallback>>,
    intervals: RefCell<Vec<ManualInterval>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fake time in ms
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Frame callbacks waiting for the next frame
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Intervals that have not stopped yet
    pub fn active_intervals(&self) -> usize {
        self.intervals.borrow().len()
    }

    /// Run every frame callback queued before this call.
    /// Callbacks queued while running wait for the next call.
    /// Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let callbacks = std::mem::take(&mut *self.frames.borrow_mut());
        let count = callbacks.len();
        let now = self.now.get();
        for callback in callbacks {
            callback(now);
        }
        count
    }

    /// Move the clock forward, firing intervals in due order.
    /// Returns the number of interval invocations.
    pub fn advance(&self, ms: f64) -> usize {
        let target = self.now.get() + ms;
        let mut fired = 0;
        loop {
            // Take the earliest due interval out so its task may schedule more work
            let next = {
                let mut intervals = self.intervals.borrow_mut();
                let earliest = intervals
                    .iter()
                    .enumerate()
                    .filter(|(_, i)| i.next_due <= target)
                    .min_by(|(_, a), (_, b)| a.next_due.total_cmp(&b.next_due))
                    .map(|(idx, _)| idx);
                earliest.map(|idx| intervals.remove(idx))
            };
            let Some(mut interval) = next else { break };

            self.now.set(interval.next_due);
            fired += 1;
            if (interval.task)() == TimerControl::Continue {
                interval.next_due += interval.period;
                self.intervals.borrow_mut().push(interval);
            }
        }
        self.now.set(target);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.frames.borrow_mut().push(callback);
    }

    fn set_interval(&self, period_ms: u32, task: IntervalTask) {
        let period = f64::from(period_ms.max(1));
        self.intervals.borrow_mut().push(ManualInterval {
            period,
            next_due: self.now.get() + period,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_frames_run_once() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        sched.request_frame(Box::new(move |_| h.set(h.get() + 1)));
        assert_eq!(sched.run_frame(), 1);
        assert_eq!(sched.run_frame(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_interval_fires_until_stopped() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        sched.set_interval(
            10,
            Box::new(move || {
                h.set(h.get() + 1);
                if h.get() == 3 {
                    TimerControl::Stop
                } else {
                    TimerControl::Continue
                }
            }),
        );
        assert_eq!(sched.advance(25.0), 2);
        assert_eq!(sched.active_intervals(), 1);
        assert_eq!(sched.advance(100.0), 1);
        assert_eq!(hits.get(), 3);
        assert_eq!(sched.active_intervals(), 0);
    }

    #[test]
    fn test_interval_clock_matches_due_time() {
        let sched = Rc::new(ManualScheduler::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (s, v) = (sched.clone(), seen.clone());
        sched.set_interval(
            14,
            Box::new(move || {
                v.borrow_mut().push(s.now());
                TimerControl::Continue
            }),
        );
        sched.advance(50.0);
        assert_eq!(*seen.borrow(), vec![14.0, 28.0, 42.0]);
        assert_eq!(sched.now(), 50.0);
    }
}
