//! Theme Preference
//!
//! Light/dark theme persisted in browser local storage.

use std::fmt;

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognised reads as light
    pub fn parse(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon on the toggle button: the theme you would switch to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key/value storage for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or("local storage unavailable")?;
        storage
            .set_item(key, value)
            .map_err(|e| crate::error::js_message(&e))
    }
}

/// Reads and writes the theme under one storage key
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    key: String,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn load(&self) -> Theme {
        self.storage
            .get(&self.key)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    /// Switch away from `current` and persist the result
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(e) = self.storage.set(&self.key, next.as_str()) {
            log::warn!("could not persist theme {next}: {e}");
        }
        next
    }
}

/// Set `data-theme` on the document element
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("could not apply theme: {}", crate::error::js_message(&e));
            }
        }
        None => log::warn!("no document element to apply theme to"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.read_only {
                return Err("quota exceeded".into());
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_or_unknown_value_loads_light() {
        let store = ThemeStore::new(MemoryStore::default(), "taskflow-theme");
        assert_eq!(store.load(), Theme::Light);

        store.storage.set("taskflow-theme", "sepia").unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_across_loads() {
        let store = ThemeStore::new(MemoryStore::default(), "taskflow-theme");

        let theme = store.toggle(store.load());
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(
            store.storage.get("taskflow-theme").as_deref(),
            Some("dark")
        );

        assert_eq!(store.toggle(theme), Theme::Light);
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_still_switches_when_storage_fails() {
        let storage = MemoryStore { read_only: true, ..Default::default() };
        let store = ThemeStore::new(storage, "taskflow-theme");

        assert_eq!(store.toggle(Theme::Light), Theme::Dark);
        assert_eq!(store.load(), Theme::Light);
    }
}
