//! Pointer, touch, card and scroll input mapping
//!
//! Browser listeners translate raw events into [`InputEvent`]s; the
//! [`PointerTracker`] turns those into an [`InputEffect`] that is applied to
//! the bubble and sparkle fields.

use glam::Vec2;

use crate::Rect;
use crate::sim::{BubbleField, SparkleField};

/// Page input relevant to the particle fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// `mousemove` at client coordinates
    MouseMove(Vec2),
    /// `touchmove`; `None` when the event carried no touches
    TouchMove(Option<Vec2>),
    /// `pointermove` (mouse, pen or touch) at client coordinates
    PointerMove(Vec2),
    /// Pointer left the window
    PointerOut,
    /// Pointer entered or touch started on a card
    CardEnter(Rect),
    /// Pointer left or touch ended on a card
    CardLeave,
    /// Page scrolled to this vertical offset
    Scroll(f32),
}

/// What an input event does to the fields
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputEffect {
    pub bubbles_visible: Option<bool>,
    /// Pull bubbles toward this point
    pub attract: Option<Vec2>,
    /// Scroll delta to jostle bubbles with
    pub scroll_delta: Option<f32>,
    /// Shed a sparkle burst here
    pub sparkle_at: Option<Vec2>,
}

impl InputEffect {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply to whichever fields exist on the page
    pub fn apply(&self, bubbles: Option<&mut BubbleField>, sparkles: Option<&mut SparkleField>) {
        if let Some(field) = bubbles {
            if let Some(visible) = self.bubbles_visible {
                field.set_visible(visible);
            }
            if let Some(target) = self.attract {
                field.attract(target);
            }
            if let Some(delta) = self.scroll_delta {
                field.nudge_scroll(delta);
            }
        }
        if let (Some(field), Some(at)) = (sparkles, self.sparkle_at) {
            field.pointer_moved(at);
        }
    }
}

/// Tracks the pointer and scroll position between events
#[derive(Debug, Clone)]
pub struct PointerTracker {
    last_scroll_y: f32,
    pointer: Option<Vec2>,
}

impl PointerTracker {
    /// `scroll_y` is the page offset when listeners are attached
    pub fn new(scroll_y: f32) -> Self {
        Self {
            last_scroll_y: scroll_y,
            pointer: None,
        }
    }

    /// Last pointer position seen, if any
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn handle(&mut self, event: InputEvent) -> InputEffect {
        match event {
            InputEvent::MouseMove(at) => {
                self.pointer = Some(at);
                InputEffect {
                    bubbles_visible: Some(true),
                    attract: Some(at),
                    ..Default::default()
                }
            }
            InputEvent::TouchMove(at) => {
                if let Some(at) = at {
                    self.pointer = Some(at);
                }
                InputEffect {
                    bubbles_visible: Some(true),
                    attract: at,
                    ..Default::default()
                }
            }
            InputEvent::PointerMove(at) => {
                self.pointer = Some(at);
                InputEffect {
                    sparkle_at: Some(at),
                    ..Default::default()
                }
            }
            InputEvent::PointerOut | InputEvent::CardLeave => InputEffect {
                bubbles_visible: Some(false),
                ..Default::default()
            },
            InputEvent::CardEnter(rect) => InputEffect {
                bubbles_visible: Some(true),
                attract: Some(rect.center()),
                ..Default::default()
            },
            InputEvent::Scroll(y) => {
                let delta = y - self.last_scroll_y;
                self.last_scroll_y = y;
                InputEffect {
                    scroll_delta: Some(delta),
                    ..Default::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Bounds;

    #[test]
    fn test_mouse_move_shows_and_attracts() {
        let mut t = PointerTracker::new(0.0);
        let fx = t.handle(InputEvent::MouseMove(Vec2::new(5.0, 6.0)));
        assert_eq!(fx.bubbles_visible, Some(true));
        assert_eq!(fx.attract, Some(Vec2::new(5.0, 6.0)));
        assert_eq!(fx.sparkle_at, None);
        assert_eq!(t.pointer(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn test_empty_touch_only_shows() {
        let mut t = PointerTracker::new(0.0);
        let fx = t.handle(InputEvent::TouchMove(None));
        assert_eq!(fx.bubbles_visible, Some(true));
        assert_eq!(fx.attract, None);
    }

    #[test]
    fn test_card_enter_targets_center() {
        let mut t = PointerTracker::new(0.0);
        let fx = t.handle(InputEvent::CardEnter(Rect::new(100.0, 50.0, 200.0, 80.0)));
        assert_eq!(fx.attract, Some(Vec2::new(200.0, 90.0)));
        let fx = t.handle(InputEvent::CardLeave);
        assert_eq!(fx.bubbles_visible, Some(false));
        assert!(fx.attract.is_none());
    }

    #[test]
    fn test_scroll_delta_tracks_last_offset() {
        let mut t = PointerTracker::new(100.0);
        assert_eq!(t.handle(InputEvent::Scroll(160.0)).scroll_delta, Some(60.0));
        assert_eq!(t.handle(InputEvent::Scroll(140.0)).scroll_delta, Some(-20.0));
    }

    #[test]
    fn test_apply_to_fields() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut bubbles = BubbleField::with_count(bounds, 10, 1);
        let mut sparkles = SparkleField::new(bounds, 1);
        let mut t = PointerTracker::new(0.0);

        t.handle(InputEvent::MouseMove(Vec2::new(10.0, 10.0)))
            .apply(Some(&mut bubbles), Some(&mut sparkles));
        assert!(bubbles.visible);
        assert!(sparkles.is_empty());

        t.handle(InputEvent::PointerMove(Vec2::new(10.0, 10.0)))
            .apply(Some(&mut bubbles), Some(&mut sparkles));
        assert!(!sparkles.is_empty());

        t.handle(InputEvent::PointerOut).apply(Some(&mut bubbles), None);
        assert!(!bubbles.visible);
    }

    #[test]
    fn test_effect_without_fields_is_noop() {
        let fx = InputEffect {
            bubbles_visible: Some(true),
            sparkle_at: Some(Vec2::ZERO),
            ..Default::default()
        };
        fx.apply(None, None);
        assert!(!fx.is_empty());
        assert!(InputEffect::default().is_empty());
    }
}
