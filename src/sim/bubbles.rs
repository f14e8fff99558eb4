//! Bubble field: glowing dots that bounce around and gather at the pointer

use glam::Vec2;
use rand::Rng;

use super::bounds::{Bounds, centered, reflect_axis};
use super::{SimRng, seeded_rng};
use crate::consts::*;

/// A single bubble
#[derive(Debug, Clone)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Fixed draw opacity in [0.3, 0.8)
    pub opacity: f32,
}

impl Bubble {
    fn spawn(bounds: &Bounds, rng: &mut impl Rng) -> Self {
        let pos = bounds.random_point(rng);
        Self {
            pos,
            radius: rng.random::<f32>() * 6.0 + 2.0,
            vel: Vec2::new(centered(rng, 0.6), centered(rng, 0.6)),
            opacity: rng.random::<f32>() * 0.5 + 0.3,
        }
    }

    /// Move one step and bounce off the walls
    pub fn update(&mut self, bounds: &Bounds) {
        self.pos += self.vel;
        self.vel.x = reflect_axis(self.pos.x, self.vel.x, self.radius, bounds.width);
        self.vel.y = reflect_axis(self.pos.y, self.vel.y, self.radius, bounds.height);
    }
}

/// Bubble layer state
#[derive(Debug, Clone)]
pub struct BubbleField {
    pub bubbles: Vec<Bubble>,
    pub bounds: Bounds,
    /// Bubbles are only painted while the pointer is over the page or a card
    pub visible: bool,
    rng: SimRng,
}

impl BubbleField {
    /// Create an empty field
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self {
            bubbles: Vec::new(),
            bounds,
            visible: false,
            rng: seeded_rng(seed, 1),
        }
    }

    /// Create a field populated with `count` bubbles
    pub fn with_count(bounds: Bounds, count: usize, seed: u64) -> Self {
        let mut field = Self::new(bounds, seed);
        field.spawn(count);
        field
    }

    /// Add `count` bubbles at random positions
    pub fn spawn(&mut self, count: usize) {
        self.bubbles.reserve(count);
        for _ in 0..count {
            let bubble = Bubble::spawn(&self.bounds, &mut self.rng);
            self.bubbles.push(bubble);
        }
    }

    pub fn tick(&mut self) {
        for bubble in self.bubbles.iter_mut() {
            bubble.update(&self.bounds);
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Pull every bubble part of the way toward `target`.
    ///
    /// Each axis moves by `BUBBLE_PULL * (u + 0.2)` of the remaining offset,
    /// a factor always inside (0, 1), so bubbles get closer without passing
    /// the target.
    pub fn attract(&mut self, target: Vec2) {
        for bubble in self.bubbles.iter_mut() {
            let fx = BUBBLE_PULL * (self.rng.random::<f32>() + 0.2);
            let fy = BUBBLE_PULL * (self.rng.random::<f32>() + 0.2);
            bubble.pos.x += (target.x - bubble.pos.x) * fx;
            bubble.pos.y += (target.y - bubble.pos.y) * fy;
        }
    }

    /// Jostle bubbles vertically in response to page scroll
    pub fn nudge_scroll(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        for bubble in self.bubbles.iter_mut() {
            bubble.pos.y += delta * BUBBLE_SCROLL_NUDGE * (self.rng.random::<f32>() - 0.5);
        }
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
