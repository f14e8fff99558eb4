//! 2D drawing surface abstraction
//!
//! Layers paint through [`Surface`] so the same code drives a browser canvas
//! and the [`RecordingSurface`] used by tests.

use glam::Vec2;

/// Fill color of a drawn circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// CSS hex literal, e.g. `#a78bfa`
    Hex(&'static str),
    /// Hue in degrees, saturation and lightness in percent, alpha in [0, 1]
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    /// CSS color string
    pub fn css(&self) -> String {
        match self {
            Color::Hex(hex) => (*hex).to_string(),
            Color::Hsla { h, s, l, a } => format!("hsla({h}, {s}%, {l}%, {a})"),
        }
    }
}

/// Blurred shadow drawn behind a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: &'static str,
    pub blur: f32,
}

/// How new pixels combine with what is already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Paint over (`source-over`)
    #[default]
    Normal,
    /// Add channel values so overlaps brighten (`lighter`)
    Additive,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name
    pub fn as_str(&self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Additive => "lighter",
        }
    }
}

/// A filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Global alpha applied to the whole shape
    pub alpha: f32,
    pub glow: Option<Glow>,
}

pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);
    /// Clear the whole surface to transparent
    fn clear(&mut self);
    fn set_blend(&mut self, mode: BlendMode);
    fn fill_circle(&mut self, circle: &Circle);
}

/// Draw operation captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Blend(BlendMode),
    Circle(Circle),
}

/// Surface that records operations instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Circles drawn since the last clear
    pub fn circles_since_clear(&self) -> Vec<&Circle> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Clear).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.ops.push(DrawOp::Blend(mode));
    }

    fn fill_circle(&mut self, circle: &Circle) {
        self.ops.push(DrawOp::Circle(*circle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::Hex("#fff").css(), "#fff");
        let c = Color::Hsla {
            h: 270.0,
            s: 75.5,
            l: 62.0,
            a: 0.5,
        };
        assert_eq!(c.css(), "hsla(270, 75.5%, 62%, 0.5)");
        assert_eq!(BlendMode::Additive.as_str(), "lighter");
    }

    #[test]
    fn test_circles_since_clear() {
        let mut s = RecordingSurface::new(10, 10);
        let circle = Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            color: Color::Hex("#000"),
            alpha: 1.0,
            glow: None,
        };
        s.fill_circle(&circle);
        s.clear();
        s.fill_circle(&circle);
        s.fill_circle(&circle);
        assert_eq!(s.circles_since_clear().len(), 2);
        assert_eq!(s.clear_count(), 1);
    }
}
