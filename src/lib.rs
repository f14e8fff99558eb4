//! folio-fx - decorative effects for a portfolio page
//!
//! Core modules:
//! - `sim`: Particle fields (bubbles, starfield, sparkle trail), pure and seeded
//! - `renderer`: 2D surface abstraction, palettes and canvas layers
//! - `scheduler` / `render_loop`: Frame and interval scheduling with stop handles
//! - `theme`: Light/dark state with change subscriptions
//! - `reveal` / `counter`: Scroll reveal flags and stepped counters
//! - `ui`: Sidebar, in-page navigation, typewriter and ripple helpers
//! - `platform`: Browser wiring (wasm only)

pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod render_loop;
pub mod renderer;
pub mod reveal;
pub mod scheduler;
pub mod sim;
pub mod theme;
pub mod ui;

pub use config::FxConfig;
pub use error::FxError;
pub use theme::{Theme, ThemeState};

use glam::Vec2;

/// Effect constants
pub mod consts {
    /// Bubble layer population
    pub const BUBBLE_COUNT: usize = 40;
    /// Pull strength toward the pointer, scaled by `(u + 0.2)`
    pub const BUBBLE_PULL: f32 = 0.12;
    /// Scroll delta to vertical nudge factor
    pub const BUBBLE_SCROLL_NUDGE: f32 = 0.2;
    pub const BUBBLE_GLOW_BLUR: f32 = 16.0;

    pub const ORB_COUNT: usize = 8;
    pub const ORB_GLOW_BLUR: f32 = 40.0;

    pub const STAR_COUNT: usize = 120;
    /// Fraction of stars that can flash
    pub const SPARK_RATIO: f32 = 0.18;
    /// Per-tick flash probability for a spark
    pub const SPARK_FLASH_CHANCE: f32 = 0.04;
    pub const TWINKLE_AMPLITUDE: f32 = 0.22;
    pub const STAR_MIN_ALPHA: f32 = 0.18;

    /// Sparkle population cap
    pub const SPARKLE_CAP: usize = 140;
    /// Particles spawned per pointer move
    pub const SPARKLE_BURST: usize = 5;
    pub const SPARKLE_GRAVITY: f32 = 0.02;
    /// Sparkles this far below the canvas are dropped
    pub const SPARKLE_FLOOR_MARGIN: f32 = 50.0;
    pub const IDLE_INTERVAL_MS: u32 = 120;
    /// Idle intervals before the trail stops spawning (~10.8s)
    pub const IDLE_LIMIT: u32 = 90;

    pub const COUNTER_INTERVAL_MS: u32 = 14;
    pub const TYPING_INTERVAL_MS: u32 = 60;

    /// Reveal start line as a fraction of viewport height
    pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9;
    /// Reveal start line for the scroll fallback, px above viewport bottom
    pub const REVEAL_FALLBACK_OFFSET: f64 = 80.0;
    /// Visible fraction that starts a counter
    pub const COUNTER_THRESHOLD: f64 = 0.6;

    /// Viewport width at or below which nav clicks close the sidebar
    pub const MOBILE_BREAKPOINT: f64 = 991.0;
}

/// Axis-aligned rectangle in CSS pixels (client coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Point relative to the rectangle's top-left corner
    #[inline]
    pub fn local(&self, point: Vec2) -> Vec2 {
        point - Vec2::new(self.left, self.top)
    }
}
