//! Sparkle trail: short-lived particles shed by the cursor

use glam::Vec2;
use rand::Rng;

use super::bounds::{Bounds, centered};
use super::{SimRng, seeded_rng};
use crate::consts::*;

/// A mortal trail particle
#[derive(Debug, Clone)]
pub struct Sparkle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Lifetime in ticks, fixed at spawn
    pub life: f32,
    /// Ticks remaining
    pub ttl: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Sparkle {
    fn spawn(pos: Vec2, rng: &mut impl Rng) -> Self {
        let life = 40.0 + rng.random::<f32>() * 40.0;
        Self {
            pos,
            vel: Vec2::new(
                centered(rng, 0.6),
                (rng.random::<f32>() - 0.7) * 1.2 - 0.8,
            ),
            size: rng.random::<f32>() * 2.4 + 0.6,
            life,
            ttl: life,
            hue: 260.0 + rng.random::<f32>() * 40.0,
            saturation: 70.0 + rng.random::<f32>() * 15.0,
            lightness: 60.0 + rng.random::<f32>() * 5.0,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += SPARKLE_GRAVITY;
        self.ttl -= 1.0;
    }

    /// Fade factor in [0, 1]
    pub fn alpha(&self) -> f32 {
        (self.ttl / self.life).max(0.0)
    }

    /// Whether the particle is spent or has fallen off the canvas
    pub fn is_dead(&self, bounds: &Bounds) -> bool {
        self.ttl <= 0.0 || self.pos.y > bounds.height + SPARKLE_FLOOR_MARGIN
    }
}

/// Last known pointer position and whether it moved since the last idle tick
#[derive(Debug, Clone, Copy)]
struct Pointer {
    pos: Vec2,
    moving: bool,
}

/// Sparkle field with a population cap and an idle spawner
#[derive(Debug, Clone)]
pub struct SparkleField {
    pub particles: Vec<Sparkle>,
    pub bounds: Bounds,
    cap: usize,
    burst: usize,
    idle_limit: u32,
    idle_intervals: u32,
    pointer: Pointer,
    rng: SimRng,
}

impl SparkleField {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(SPARKLE_CAP),
            bounds,
            cap: SPARKLE_CAP,
            burst: SPARKLE_BURST,
            idle_limit: IDLE_LIMIT,
            idle_intervals: 0,
            pointer: Pointer {
                pos: bounds.center(),
                moving: false,
            },
            rng: seeded_rng(seed, 3),
        }
    }

    /// Override population cap, burst size and idle limit
    pub fn with_limits(mut self, cap: usize, burst: usize, idle_limit: u32) -> Self {
        self.cap = cap;
        self.burst = burst;
        self.idle_limit = idle_limit;
        self
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.pos
    }

    /// Whether the idle spawner has given up until the pointer moves again
    pub fn is_idle(&self) -> bool {
        self.idle_intervals > self.idle_limit
    }

    /// Spawn up to `count` particles around `at` (±`jitter`), stopping at the cap.
    /// Returns how many were added.
    pub fn spawn(&mut self, at: Vec2, count: usize, jitter: f32) -> usize {
        let room = self.cap.saturating_sub(self.particles.len());
        let n = count.min(room);
        for _ in 0..n {
            let offset = Vec2::new(
                centered(&mut self.rng, jitter),
                centered(&mut self.rng, jitter),
            );
            let sparkle = Sparkle::spawn(at + offset, &mut self.rng);
            self.particles.push(sparkle);
        }
        n
    }

    /// Pointer moved: remember it and shed a burst
    pub fn pointer_moved(&mut self, pos: Vec2) -> usize {
        self.pointer = Pointer { pos, moving: true };
        self.idle_intervals = 0;
        self.spawn(pos, self.burst, 5.0)
    }

    /// Periodic trickle at the pointer. Stops after `idle_limit` intervals
    /// without pointer motion.
    pub fn idle_tick(&mut self) -> usize {
        if !self.pointer.moving {
            self.idle_intervals = self.idle_intervals.saturating_add(1);
            if self.is_idle() {
                return 0;
            }
        }
        self.pointer.moving = false;
        self.spawn(self.pointer.pos, 1, 15.0)
    }

    /// Advance all particles and drop the dead ones
    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for p in self.particles.iter_mut() {
            p.update();
        }
        self.particles.retain(|p| !p.is_dead(&bounds));
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
