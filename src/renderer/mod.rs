//! Canvas 2D rendering module
//!
//! Particle fields are painted as filled, optionally glowing circles through
//! the [`Surface`] trait.

pub mod layers;
pub mod palette;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use layers::{BubbleLayer, SparkleLayer, StarfieldLayer};
pub use palette::Palette;
pub use surface::{BlendMode, Circle, Color, DrawOp, Glow, RecordingSurface, Surface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
