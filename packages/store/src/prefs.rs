//! Device-local display preferences: colour theme and privacy blur.
//!
//! Stored as plain strings next to the session token and never sent to the
//! server.

use std::fmt;
use std::sync::Arc;

use crate::kv::{KeyValueStore, SharedStore};

pub const THEME_KEY: &str = "theme";
pub const PRIVACY_BLUR_KEY: &str = "privacy_blur";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone)]
pub struct Preferences {
    store: SharedStore,
}

impl Preferences {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn privacy_blur(&self) -> bool {
        self.store.get(PRIVACY_BLUR_KEY).as_deref() == Some("true")
    }

    pub fn set_privacy_blur(&self, enabled: bool) {
        self.store
            .set(PRIVACY_BLUR_KEY, if enabled { "true" } else { "false" });
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme())
            .field("privacy_blur", &self.privacy_blur())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(!prefs.privacy_blur());
    }

    #[test]
    fn test_values_persist_in_store() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());
        prefs.set_theme(Theme::Light);
        prefs.set_privacy_blur(true);

        let reopened = Preferences::new(store.clone());
        assert_eq!(reopened.theme(), Theme::Light);
        assert!(reopened.privacy_blur());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        assert_eq!(Preferences::new(store).theme(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
