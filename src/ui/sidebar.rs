//! Mobile sidebar open/close state

use crate::consts::MOBILE_BREAKPOINT;

/// Glyph placed in the menu button
pub const MENU_GLYPH: &str = "☰";
/// Class toggled on the sidebar and overlay while open
pub const ACTIVE_CLASS: &str = "active";

/// Sidebar and overlay share one open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button: flip and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Overlay click
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Nav link click: closes only on narrow viewports. Returns whether it closed.
    pub fn nav_clicked(&mut self, viewport_width: f64) -> bool {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.close();
            true
        } else {
            false
        }
    }

    /// Value for the `aria-hidden` attribute on sidebar and overlay
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_aria() {
        let mut s = Sidebar::default();
        assert_eq!(s.aria_hidden(), "true");
        assert!(s.toggle());
        assert_eq!(s.aria_hidden(), "false");
        assert!(!s.toggle());
    }

    #[test]
    fn test_nav_click_breakpoint() {
        let mut s = Sidebar::default();
        s.toggle();
        assert!(!s.nav_clicked(1280.0));
        assert!(s.is_open());
        assert!(s.nav_clicked(991.0));
        assert!(!s.is_open());
    }
}
