//! Typewriter effect for the intro line

use crate::scheduler::{Scheduler, TimerControl};

pub const TYPING_SELECTOR: &str = ".lead.typing span";

/// Reveals a string one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Show one more character; returns the visible prefix, or `None` when done
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

/// Type `text` on `scheduler`, passing each prefix to `display`. The first
/// character is shown at once, the rest one per `period_ms`.
pub fn type_text(
    scheduler: &dyn Scheduler,
    text: &str,
    period_ms: u32,
    mut display: impl FnMut(&str) + 'static,
) {
    let mut writer = Typewriter::new(text);
    let Some(first) = writer.advance() else {
        return;
    };
    display(&first);
    if writer.is_done() {
        return;
    }
    scheduler.set_interval(
        period_ms,
        Box::new(move || match writer.advance() {
            Some(prefix) => {
                display(&prefix);
                if writer.is_done() {
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
    use crate::consts::TYPING_INTERVAL_MS;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_types_unicode_by_char() {
        let mut w = Typewriter::new("héllo");
        assert_eq!(w.advance().as_deref(), Some("h"));
        assert_eq!(w.advance().as_deref(), Some("hé"));
        w.advance();
        w.advance();
        assert_eq!(w.advance().as_deref(), Some("héllo"));
        assert_eq!(w.advance(), None);
    }

    #[test]
    fn test_type_text_timing() {
        let sched = ManualScheduler::new();
        let out = Rc::new(RefCell::new(String::new()));
        let o = out.clone();
        type_text(&sched, "Hi there", TYPING_INTERVAL_MS, move |s| {
            *o.borrow_mut() = s.to_string()
        });
        assert_eq!(*out.borrow(), "H");
        sched.advance(60.0);
        assert_eq!(*out.borrow(), "Hi");
        sched.advance(60.0 * 10.0);
        assert_eq!(*out.borrow(), "Hi there");
        assert_eq!(sched.active_intervals(), 0);
    }

    #[test]
    fn test_single_char_needs_no_timer() {
        let sched = ManualScheduler::new();
        let out = Rc::new(RefCell::new(String::new()));
        let o = out.clone();
        type_text(&sched, "✓", TYPING_INTERVAL_MS, move |s| {
            *o.borrow_mut() = s.to_string()
        });
        assert_eq!(*out.borrow(), "✓");
        assert_eq!(sched.active_intervals(), 0);
    }

    #[test]
    fn test_empty_text_schedules_nothing() {
        let sched = ManualScheduler::new();
        type_text(&sched, "", TYPING_INTERVAL_MS, |_| {});
        assert_eq!(sched.active_intervals(), 0);
    }
}
