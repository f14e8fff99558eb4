//! Canvas layers: a particle field bound to the surface it paints
//!
//! Each layer is an [`Animation`]: one frame ticks the field, then paints it.

use super::palette::Palette;
use super::surface::{BlendMode, Circle, Color, Glow, Surface};
use crate::consts::BUBBLE_GLOW_BLUR;
use crate::render_loop::Animation;
use crate::sim::{Bounds, BubbleField, SparkleField, Starfield};
use crate::theme::Theme;

fn bounds_of(surface: &impl Surface) -> Bounds {
    let (w, h) = surface.size();
    Bounds::new(w as f32, h as f32)
}

/// Dark bubbles that only show while the pointer is active
pub struct BubbleLayer<S: Surface> {
    pub field: BubbleField,
    surface: S,
}

impl<S: Surface> BubbleLayer<S> {
    pub fn new(surface: S, count: usize, seed: u64) -> Self {
        let field = BubbleField::with_count(bounds_of(&surface), count, seed);
        Self { field, surface }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.resize(bounds_of(&self.surface));
    }

    pub fn paint(&mut self) {
        self.surface.clear();
        if !self.field.visible {
            return;
        }
        for bubble in &self.field.bubbles {
            self.surface.fill_circle(&Circle {
                center: bubble.pos,
                radius: bubble.radius,
                color: Color::Hex("#111"),
                alpha: bubble.opacity,
                glow: Some(Glow {
                    color: "#000",
                    blur: BUBBLE_GLOW_BLUR,
                }),
            });
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface> Animation for BubbleLayer<S> {
    fn frame(&mut self, _time: f64) {
        self.field.tick();
        self.paint();
    }
}

/// Orbs and stars, colored by the current theme
pub struct StarfieldLayer<S: Surface> {
    pub field: Starfield,
    theme: Theme,
    surface: S,
}

impl<S: Surface> StarfieldLayer<S> {
    pub fn new(surface: S, orb_count: usize, star_count: usize, theme: Theme, seed: u64) -> Self {
        let field = Starfield::new(bounds_of(&surface), orb_count, star_count, seed);
        Self {
            field,
            theme,
            surface,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.resize(bounds_of(&self.surface));
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch palette and repaint right away without advancing the field
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.paint();
    }

    pub fn paint(&mut self) {
        let palette = Palette::for_theme(self.theme);
        self.surface.clear();

        for orb in &self.field.orbs {
            self.surface.fill_circle(&Circle {
                center: orb.pos,
                radius: orb.radius,
                color: Color::Hex(palette.orb_fill),
                alpha: palette.orb_alpha,
                glow: Some(palette.orb_glow()),
            });
        }

        for star in &self.field.stars {
            let (fill, glow) = palette.star(star.spark);
            self.surface.fill_circle(&Circle {
                center: star.pos,
                radius: star.radius,
                color: Color::Hex(fill),
                alpha: star.alpha(),
                glow: Some(glow),
            });
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface> Animation for StarfieldLayer<S> {
    fn frame(&mut self, _time: f64) {
        self.field.tick();
        self.paint();
    }
}

/// Additively blended cursor trail
pub struct SparkleLayer<S: Surface> {
    pub field: SparkleField,
    surface: S,
}

impl<S: Surface> SparkleLayer<S> {
    pub fn new(surface: S, seed: u64) -> Self {
        let field = SparkleField::new(bounds_of(&surface), seed);
        Self { field, surface }
    }

    pub fn with_field(surface: S, field: SparkleField) -> Self {
        Self { field, surface }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.resize(bounds_of(&self.surface));
    }

    pub fn paint(&mut self) {
        self.surface.clear();
        self.surface.set_blend(BlendMode::Additive);
        for p in &self.field.particles {
            self.surface.fill_circle(&Circle {
                center: p.pos,
                radius: p.size,
                color: Color::Hsla {
                    h: p.hue,
                    s: p.saturation,
                    l: p.lightness,
                    a: p.alpha(),
                },
                alpha: 1.0,
                glow: None,
            });
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface> Animation for SparkleLayer<S> {
    fn frame(&mut self, _time: f64) {
        self.field.tick();
        self.paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use crate::render_loop::RenderLoop;
    use crate::renderer::surface::{DrawOp, RecordingSurface};
    use crate::scheduler::ManualScheduler;
    use crate::theme::ThemeState;
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_hidden_bubbles_only_clear() {
        let mut layer = BubbleLayer::new(RecordingSurface::new(400, 300), BUBBLE_COUNT, 1);
        layer.frame(0.0);
        assert_eq!(layer.surface().ops, vec![DrawOp::Clear]);

        layer.field.set_visible(true);
        layer.frame(16.0);
        assert_eq!(layer.surface().circles_since_clear().len(), BUBBLE_COUNT);
    }

    #[test]
    fn test_bubble_draw_uses_opacity() {
        let mut layer = BubbleLayer::new(RecordingSurface::new(400, 300), 3, 9);
        layer.field.set_visible(true);
        layer.paint();
        let circles = layer.surface().circles_since_clear();
        for (c, b) in circles.iter().zip(&layer.field.bubbles) {
            assert_eq!(c.alpha, b.opacity);
            assert_eq!(c.color, Color::Hex("#111"));
        }
    }

    #[test]
    fn test_starfield_palette_follows_theme() {
        let mut layer = StarfieldLayer::new(RecordingSurface::new(400, 300), 2, 10, Theme::Light, 5);
        layer.paint();
        let first = *layer.surface().circles_since_clear()[0];
        assert_eq!(first.color, Color::Hex("#2563eb"));
        assert_eq!(first.alpha, 0.13);

        layer.set_theme(Theme::Dark);
        let first = *layer.surface().circles_since_clear()[0];
        assert_eq!(first.color, Color::Hex("#a78bfa"));
        assert_eq!(first.alpha, 0.18);
    }

    #[test]
    fn test_theme_toggle_repaints_immediately() {
        let store = Rc::new(MemoryStore::new());
        let mut theme = ThemeState::load(store, false);
        let layer = Rc::new(RefCell::new(StarfieldLayer::new(
            RecordingSurface::new(320, 240),
            ORB_COUNT,
            STAR_COUNT,
            theme.theme(),
            3,
        )));
        let l = layer.clone();
        theme.on_change(move |t| l.borrow_mut().set_theme(t));

        let positions: Vec<Vec2> = layer.borrow().field.stars.iter().map(|s| s.pos).collect();
        let clears = layer.borrow().surface().clear_count();
        theme.toggle();

        let layer = layer.borrow();
        // One repaint in the dark palette, no simulation step
        assert_eq!(layer.surface().clear_count(), clears + 1);
        assert_eq!(layer.theme(), Theme::Dark);
        let orb = *layer.surface().circles_since_clear()[0];
        assert_eq!(orb.glow.map(|g| g.color), Some("#38bdf8"));
        let after: Vec<Vec2> = layer.field.stars.iter().map(|s| s.pos).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_sparkles_draw_additive() {
        let mut layer = SparkleLayer::new(RecordingSurface::new(400, 300), 2);
        layer.field.pointer_moved(Vec2::new(200.0, 150.0));
        layer.frame(0.0);
        let ops = &layer.surface().ops;
        assert_eq!(ops[0], DrawOp::Clear);
        assert_eq!(ops[1], DrawOp::Blend(BlendMode::Additive));
        assert_eq!(layer.surface().circles_since_clear().len(), SPARKLE_BURST);
    }

    #[test]
    fn test_sparkle_layer_under_render_loop() {
        let sched = Rc::new(ManualScheduler::new());
        let layer = Rc::new(RefCell::new(SparkleLayer::new(RecordingSurface::new(400, 300), 4)));
        layer.borrow_mut().field.pointer_moved(Vec2::new(10.0, 10.0));
        let handle = RenderLoop::start(sched.clone(), layer.clone());

        // Longest possible life is under 80 ticks
        for _ in 0..81 {
            sched.run_frame();
        }
        assert!(layer.borrow().field.is_empty());
        assert_eq!(handle.frames(), 81);
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut layer = BubbleLayer::new(RecordingSurface::new(400, 300), 1, 1);
        layer.resize(1280, 720);
        assert_eq!(layer.field.bounds, Bounds::new(1280.0, 720.0));
        assert_eq!(layer.surface().size(), (1280, 720));
    }
}
