//! Canvas bounds and edge policies (bounce and wrap)

use glam::Vec2;
use rand::Rng;

/// Drawing area of a field, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniform random point inside the bounds
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Reflecting wall on one axis.
///
/// Returns the new velocity component. The sign only flips when the edge
/// (`pos ± radius`) is past a wall and the particle is still heading into it,
/// so a particle straddling the wall is not flipped again on the next tick.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, radius: f32, limit: f32) -> f32 {
    if pos - radius < 0.0 && vel < 0.0 {
        -vel
    } else if pos + radius > limit && vel > 0.0 {
        -vel
    } else {
        vel
    }
}

/// Wrap around one axis: a particle fully past one edge reappears just
/// outside the opposite edge.
#[inline]
pub fn wrap_axis(pos: f32, radius: f32, limit: f32) -> f32 {
    if pos < -radius {
        limit + radius
    } else if pos > limit + radius {
        -radius
    } else {
        pos
    }
}

/// Uniform value in `[-half, half)`
#[inline]
pub(crate) fn centered(rng: &mut impl Rng, half: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * half * 2.0
}
