//! One-way reveal flags for `.reveal` elements
//!
//! An element is revealed the first time its top edge crosses the start line
//! and is never checked again afterwards.

use crate::consts::{REVEAL_FALLBACK_OFFSET, REVEAL_VIEWPORT_FRACTION};

/// Class marking elements to reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
/// Class added once an element is revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Which check decided visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    /// Intersection observer: top above 90% of the viewport height
    Observer,
    /// Scroll polling: top above `viewport_height - 80`
    ScrollFallback,
}

impl RevealTrigger {
    /// Client-space y coordinate an element's top must pass
    pub fn start_line(&self, viewport_height: f64) -> f64 {
        match self {
            RevealTrigger::Observer => viewport_height * REVEAL_VIEWPORT_FRACTION,
            RevealTrigger::ScrollFallback => viewport_height - REVEAL_FALLBACK_OFFSET,
        }
    }

    pub fn in_zone(&self, top: f64, viewport_height: f64) -> bool {
        top < self.start_line(viewport_height)
    }
}

/// Intersection observer root margin that puts the bottom edge of the
/// observed area on the [`RevealTrigger::Observer`] start line
pub fn observer_root_margin() -> String {
    let inset = ((1.0 - REVEAL_VIEWPORT_FRACTION) * 100.0).round();
    format!("0px 0px -{inset}% 0px")
}

/// Reveal state for a fixed list of elements, indexed in document order
#[derive(Debug, Clone)]
pub struct RevealController {
    revealed: Vec<bool>,
    pending: usize,
}

impl RevealController {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
            pending: count,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn pending_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, revealed)| !**revealed)
            .map(|(i, _)| i)
    }

    /// Mark an element revealed. Returns true only on the first call for it.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.pending -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check every pending element. `top_of` is only called for elements not
    /// yet revealed. Returns the newly revealed indices.
    pub fn scan(
        &mut self,
        viewport_height: f64,
        trigger: RevealTrigger,
        mut top_of: impl FnMut(usize) -> f64,
    ) -> Vec<usize> {
        let hits: Vec<usize> = self
            .pending_indices()
            .filter(|&i| trigger.in_zone(top_of(i), viewport_height))
            .collect();
        for &i in &hits {
            self.reveal(i);
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_start_lines() {
        assert_eq!(RevealTrigger::Observer.start_line(1000.0), 900.0);
        assert_eq!(RevealTrigger::ScrollFallback.start_line(1000.0), 920.0);
        assert!(RevealTrigger::Observer.in_zone(899.0, 1000.0));
        assert!(!RevealTrigger::Observer.in_zone(900.0, 1000.0));
    }

    #[test]
    fn test_observer_margin_matches_start_line() {
        assert_eq!(observer_root_margin(), "0px 0px -10% 0px");
    }

    #[test]
    fn test_reveal_once() {
        let mut c = RevealController::new(2);
        assert!(c.reveal(1));
        assert!(!c.reveal(1));
        assert!(!c.reveal(7));
        assert_eq!(c.pending(), 1);
        assert!(c.is_revealed(1));
        assert!(!c.is_revealed(0));
    }

    #[test]
    fn test_scan_never_rechecks_revealed() {
        let mut c = RevealController::new(3);
        let tops = [100.0, 2000.0, 750.0];
        let checks = Cell::new(0);

        let hits = c.scan(800.0, RevealTrigger::ScrollFallback, |i| {
            checks.set(checks.get() + 1);
            tops[i]
        });
        assert_eq!(hits, vec![0]);
        assert_eq!(checks.get(), 3);

        // Element 0 scrolls back out of view; it stays revealed and unchecked
        let tops = [5000.0, 300.0, 750.0];
        checks.set(0);
        let hits = c.scan(800.0, RevealTrigger::ScrollFallback, |i| {
            checks.set(checks.get() + 1);
            tops[i]
        });
        assert_eq!(hits, vec![1]);
        assert_eq!(checks.get(), 2);
        assert!(c.is_revealed(0));
    }

    #[test]
    fn test_flags_are_monotonic() {
        let mut c = RevealController::new(4);
        let mut seen = [false; 4];
        for step in 0..20 {
            let top = if step % 2 == 0 { 0.0 } else { 9999.0 };
            c.scan(600.0, RevealTrigger::Observer, |i| top + i as f64 * 200.0);
            for (i, was) in seen.iter_mut().enumerate() {
                if *was {
                    assert!(c.is_revealed(i));
                }
                *was = c.is_revealed(i);
            }
        }
        assert_eq!(c.pending(), 1);
    }
}
