//! In-page anchor navigation and button ripple position

use glam::Vec2;

use crate::Rect;

pub const SIDEBAR_LINK_SELECTOR: &str = ".sidebar .nav-link";
pub const ANCHOR_LINK_SELECTOR: &str = ".nav-link[href^=\"#\"]";
pub const RIPPLE_SELECTOR: &str = ".fancy-btn";

/// Selector for an in-page link target. `None` for external links and bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(href) }
}

/// Ripple custom properties (`--x`, `--y`) for a pointer over a button
pub fn ripple_offset(pointer: Vec2, button: Rect) -> (String, String) {
    let local = button.local(pointer);
    (format!("{}px", local.x), format!("{}px", local.y))
}
