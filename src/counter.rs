//! Animated numeric counters
//!
//! `<span class="counter" data-target="250">` counts up from 0 to its target
//! the first time it scrolls into view.

use crate::consts::COUNTER_THRESHOLD;
use crate::scheduler::{Scheduler, TimerControl};

pub const COUNTER_SELECTOR: &str = ".counter";
/// Attribute holding the target value
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// Parse a `data-target` value. Anything that is not a non-negative integer
/// counts as 0.
pub fn parse_target(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.floor() as u64)
        .unwrap_or(0)
}

/// Whether an intersection report shows enough of the counter to start it.
/// Observers also report on first observation, whenever any part is on screen.
pub fn should_start(is_intersecting: bool, visible_ratio: f64) -> bool {
    is_intersecting && visible_ratio >= COUNTER_THRESHOLD
}

/// Stepped count from 0 to a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    current: u64,
    step: u64,
    finished: bool,
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0,
            step: (target / 100).max(1),
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step_size(&self) -> u64 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the value to display, or `None` once the
    /// target has been shown. The last value is exactly the target.
    pub fn advance(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        let next = self.current.saturating_add(self.step);
        if next >= self.target {
            self.current = self.target;
            self.finished = true;
        } else {
            self.current = next;
        }
        Some(self.current)
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.advance()
    }
}

/// Count up to `target` on `scheduler`, calling `display` with each value.
/// The interval stops itself after the final value, or early if `display`
/// returns [`TimerControl::Stop`] (e.g. the element left the page).
pub fn animate(
    scheduler: &dyn Scheduler,
    target: u64,
    period_ms: u32,
    mut display: impl FnMut(u64) -> TimerControl + 'static,
) {
    let mut counter = Counter::new(target);
    scheduler.set_interval(
        period_ms,
        Box::new(move || match counter.advance() {
            Some(value) => {
                if display(value) == TimerControl::Stop || counter.is_finished() {
                    TimerControl::Stop
                } else {
                    TimerControl::Continue
                }
            }
            None => TimerControl::Stop,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COUNTER_INTERVAL_MS;
    use crate::scheduler::ManualScheduler;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_small_target_steps_by_one() {
        let values: Vec<u64> = Counter::new(5).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clamps_final_step() {
        let values: Vec<u64> = Counter::new(250).collect();
        assert_eq!(Counter::new(250).step_size(), 2);
        assert_eq!(values.len(), 125);
        assert_eq!(*values.last().unwrap(), 250);

        let values: Vec<u64> = Counter::new(1050).collect();
        // step 10: ..., 1040, then 1050 exactly
        assert_eq!(values[values.len() - 2], 1040);
        assert_eq!(*values.last().unwrap(), 1050);
    }

    #[test]
    fn test_zero_target() {
        let values: Vec<u64> = Counter::new(0).collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_starts_only_when_mostly_visible() {
        assert!(!should_start(true, 0.05));
        assert!(!should_start(true, 0.59));
        assert!(should_start(true, 0.6));
        assert!(should_start(true, 1.0));
        assert!(!should_start(false, 1.0));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("120")), 120);
        assert_eq!(parse_target(Some(" 42 ")), 42);
        assert_eq!(parse_target(Some("3.9")), 3);
        assert_eq!(parse_target(Some("-5")), 0);
        assert_eq!(parse_target(Some("lots")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn test_animate_on_scheduler() {
        let sched = ManualScheduler::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let s = shown.clone();
        animate(&sched, 300, COUNTER_INTERVAL_MS, move |v| {
            s.borrow_mut().push(v);
            TimerControl::Continue
        });

        sched.advance(14.0 * 10.0);
        assert_eq!(shown.borrow().len(), 10);
        assert_eq!(shown.borrow()[9], 30);

        sched.advance(14.0 * 200.0);
        assert_eq!(shown.borrow().len(), 100);
        assert_eq!(*shown.borrow().last().unwrap(), 300);
        // Timer released after the final value
        assert_eq!(sched.active_intervals(), 0);
    }

    #[test]
    fn test_animate_stops_when_display_gone() {
        let sched = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(0));
        let c = calls.clone();
        animate(&sched, 1000, COUNTER_INTERVAL_MS, move |_| {
            *c.borrow_mut() += 1;
            if *c.borrow() == 3 {
                TimerControl::Stop
            } else {
                TimerControl::Continue
            }
        });
        sched.advance(14.0 * 50.0);
        assert_eq!(*calls.borrow(), 3);
        assert_eq!(sched.active_intervals(), 0);
    }

    proptest! {
        #[test]
        fn prop_sequence_shape(target in 0u64..1_000_000) {
            let step = (target / 100).max(1);
            let values: Vec<u64> = Counter::new(target).collect();
            prop_assert_eq!(*values.last().unwrap(), target);
            for (i, v) in values.iter().enumerate() {
                prop_assert!(*v <= target);
                if i + 1 < values.len() {
                    prop_assert_eq!(*v, (i as u64 + 1) * step);
                }
            }
        }
    }
}
