//! Particle simulation module
//!
//! Each field owns its particles and a seeded RNG so runs are reproducible:
//! - Fixed per-frame steps (no delta time, one tick per animation frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod bubbles;
pub mod sparkle;
pub mod starfield;

pub use bounds::{Bounds, reflect_axis, wrap_axis};
pub use bubbles::{Bubble, BubbleField};
pub use sparkle::{Sparkle, SparkleField};
pub use starfield::{Orb, Star, Starfield};

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Random source used by every field
pub type SimRng = Pcg32;

/// Create a field RNG. `salt` separates fields built from the same page seed.
pub fn seeded_rng(seed: u64, salt: u64) -> SimRng {
    Pcg32::seed_from_u64(seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
