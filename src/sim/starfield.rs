//! Starfield: a few large wrapping orbs behind many small twinkling stars

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::bounds::{Bounds, centered, reflect_axis, wrap_axis};
use super::{SimRng, seeded_rng};
use crate::consts::*;

/// Large soft orb. Drifts with a phase-modulated speed and wraps at the edges.
#[derive(Debug, Clone)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Radians, only ever increases
    pub phase: f32,
}

impl Orb {
    fn spawn(bounds: &Bounds, rng: &mut impl Rng) -> Self {
        Self {
            pos: bounds.random_point(rng),
            radius: rng.random::<f32>() * 38.0 + 22.0,
            vel: Vec2::new(centered(rng, 0.35), centered(rng, 0.35)),
            phase: rng.random::<f32>() * TAU,
        }
    }

    pub fn update(&mut self, bounds: &Bounds, rng: &mut impl Rng) {
        self.pos.x += self.vel.x * (0.7 + self.phase.sin() * 0.2);
        self.pos.y += self.vel.y * (0.7 + self.phase.cos() * 0.2);
        self.phase += 0.01 + rng.random::<f32>() * 0.01;
        self.pos.x = wrap_axis(self.pos.x, self.radius, bounds.width);
        self.pos.y = wrap_axis(self.pos.y, self.radius, bounds.height);
    }
}

/// Small twinkling star. Bounces off the edges like a bubble.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Resting alpha before twinkle
    pub base_alpha: f32,
    /// Twinkle phase rate
    pub speed: f32,
    pub twinkle: f32,
    /// Sparks can flash to full brightness and draw in an accent color
    pub spark: bool,
    /// Set for the tick a spark flashes
    pub flash: bool,
}

impl Star {
    fn spawn(bounds: &Bounds, rng: &mut impl Rng) -> Self {
        Self {
            pos: bounds.random_point(rng),
            radius: rng.random::<f32>() * 1.6 + 0.7,
            base_alpha: rng.random::<f32>() * 0.7 + 0.35,
            speed: rng.random::<f32>() * 0.3 + 0.1,
            twinkle: rng.random::<f32>() * TAU,
            vel: Vec2::new(centered(rng, 0.15), centered(rng, 0.15)),
            spark: rng.random::<f32>() < SPARK_RATIO,
            flash: false,
        }
    }

    pub fn update(&mut self, bounds: &Bounds, rng: &mut impl Rng) {
        self.pos += self.vel;
        self.vel.x = reflect_axis(self.pos.x, self.vel.x, 0.0, bounds.width);
        self.vel.y = reflect_axis(self.pos.y, self.vel.y, 0.0, bounds.height);
        self.twinkle += self.speed * 0.04;
        self.flash = self.spark && rng.random::<f32>() < SPARK_FLASH_CHANCE;
    }

    /// Alpha to draw with this frame
    pub fn alpha(&self) -> f32 {
        let alpha = if self.flash {
            1.0
        } else {
            self.base_alpha + self.twinkle.sin() * TWINKLE_AMPLITUDE
        };
        alpha.max(STAR_MIN_ALPHA)
    }
}

/// Orbs and stars sharing one canvas
#[derive(Debug, Clone)]
pub struct Starfield {
    pub orbs: Vec<Orb>,
    pub stars: Vec<Star>,
    pub bounds: Bounds,
    rng: SimRng,
}

impl Starfield {
    pub fn new(bounds: Bounds, orb_count: usize, star_count: usize, seed: u64) -> Self {
        let mut rng = seeded_rng(seed, 2);
        let orbs = (0..orb_count).map(|_| Orb::spawn(&bounds, &mut rng)).collect();
        let stars = (0..star_count).map(|_| Star::spawn(&bounds, &mut rng)).collect();
        Self {
            orbs,
            stars,
            bounds,
            rng,
        }
    }

    pub fn tick(&mut self) {
        for orb in self.orbs.iter_mut() {
            orb.update(&self.bounds, &mut self.rng);
        }
        for star in self.stars.iter_mut() {
            star.update(&self.bounds, &mut self.rng);
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn spark_count(&self) -> usize {
        self.stars.iter().filter(|s| s.spark).count()
    }
}
