//! Page chrome behavior: sidebar, in-page navigation, typewriter, ripple

pub mod nav;
pub mod sidebar;
pub mod typewriter;

pub use nav::{anchor_target, ripple_offset};
pub use sidebar::Sidebar;
pub use typewriter::Typewriter;
