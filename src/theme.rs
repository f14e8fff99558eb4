//! Light/dark theme state
//!
//! Resolved once at load (stored choice, then system preference, then light),
//! flipped by the toggle buttons, persisted on every change. Everything that
//! depends on the theme (root class, button labels, starfield palette)
//! subscribes through [`ThemeState::on_change`].

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::persistence::PreferenceStore;

/// Storage key for the persisted theme
pub const STORAGE_KEY: &str = "theme";

/// Class set on the document root while dark
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Desktop toggle label: offers the other theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }

    /// Mobile toggle icon
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    /// Pick the initial theme. A stored value wins; unknown values are ignored.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(Theme::from_str) {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

type Listener = Box<dyn FnMut(Theme)>;

/// Current theme plus its store and subscribers
pub struct ThemeState {
    theme: Theme,
    store: Rc<dyn PreferenceStore>,
    listeners: Vec<Listener>,
}

impl ThemeState {
    /// Resolve the initial theme from `store` and the system preference.
    /// Loading does not write to the store.
    pub fn load(store: Rc<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let stored = store.get(STORAGE_KEY);
        let theme = Theme::resolve(stored.as_deref(), system_prefers_dark);
        log::info!(
            "Theme resolved to {} ({})",
            theme.as_str(),
            if stored.is_some() { "stored" } else { "system" }
        );
        Self {
            theme,
            store,
            listeners: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Subscribe to changes. The listener is called once immediately with the
    /// current theme so it can apply the initial state.
    pub fn on_change(&mut self, mut listener: impl FnMut(Theme) + 'static) {
        listener(self.theme);
        self.listeners.push(Box::new(listener));
    }

    /// Flip the theme, persist it and notify subscribers
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set an explicit theme. No-op if unchanged.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.store.set(STORAGE_KEY, theme.as_str());
        log::info!("Theme switched to {}", theme.as_str());
        for listener in self.listeners.iter_mut() {
            listener(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_resolution_order() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn test_load_does_not_persist() {
        let store = Rc::new(MemoryStore::new());
        let state = ThemeState::load(store.clone(), true);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(store.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = Rc::new(MemoryStore::with(STORAGE_KEY, "light"));
        let mut state = ThemeState::load(store.clone(), false);

        // Stand-in for the root class marker
        let marker = Rc::new(Cell::new(false));
        let m = marker.clone();
        state.on_change(move |t| m.set(t.is_dark()));
        assert!(!marker.get());

        state.toggle();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert!(marker.get());

        state.toggle();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
        assert!(!marker.get());
    }

    #[test]
    fn test_listeners_notified_in_order() {
        let store = Rc::new(MemoryStore::new());
        let mut state = ThemeState::load(store, false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        state.on_change(move |t| s.borrow_mut().push(t));
        state.toggle();
        state.set(Theme::Dark);
        state.toggle();
        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
    }
}
