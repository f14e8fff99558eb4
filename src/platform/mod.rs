//! Platform abstraction layer
//!
//! Browser wiring for the effects (wasm only):
//! - `web_scheduler`: requestAnimationFrame / setInterval scheduler
//! - `dom`: element lookup and geometry helpers
//! - `listeners`: pointer, scroll, theme, sidebar and nav event handlers
//! - `observers`: reveal, counters and typewriter
//! - `boot`: DOM-ready start-up sequence

#[cfg(target_arch = "wasm32")]
pub mod boot;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod listeners;
#[cfg(target_arch = "wasm32")]
pub mod observers;
#[cfg(target_arch = "wasm32")]
pub mod web_scheduler;

#[cfg(target_arch = "wasm32")]
pub use boot::run;
#[cfg(target_arch = "wasm32")]
pub use web_scheduler::WebScheduler;
