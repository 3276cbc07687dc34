//! Light/dark theme preference
//!
//! The active theme is the `data-theme` attribute on the root element. The
//! preference is read from storage once at page load and written back on
//! every toggle, under the single key `theme`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::Page;
use crate::storage::Storage;

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Root attribute carrying the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Theme that follows the current attribute value on toggle.
    ///
    /// Only `dark` flips to light; anything else (including no value)
    /// becomes dark.
    pub fn next_after(current: Option<&str>) -> Self {
        if current == Some("dark") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn toggled(self) -> Self {
        Self::next_after(Some(self.as_str()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the stored preference, falling back to `default`.
///
/// Unlike a browser page, which applies whatever string is stored, a value
/// other than `dark` or `light` is replaced by `default` (with a warning)
/// so `data-theme` only ever carries a known theme.
pub fn load_preference(storage: &dyn Storage, default: ThemeMode) -> ThemeMode {
    match storage.get_item(THEME_KEY) {
        Some(value) => ThemeMode::parse(&value).unwrap_or_else(|| {
            tracing::warn!("Unknown stored theme {:?}, using {}", value, default);
            default
        }),
        None => default,
    }
}

/// Write the preference back to storage
pub fn save_preference(storage: &mut dyn Storage, mode: ThemeMode) -> Result<(), String> {
    storage.set_item(THEME_KEY, mode.as_str())
}

/// Current theme attribute on the root element
pub fn current_theme(page: &Page) -> Option<&str> {
    page.attribute(page.root(), THEME_ATTRIBUTE)
}

/// Set the theme attribute on the root element
pub fn apply_theme(page: &mut Page, mode: ThemeMode) {
    let root = page.root();
    page.set_attribute(root, THEME_ATTRIBUTE, mode.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_next_after() {
        assert_eq!(ThemeMode::next_after(Some("dark")), ThemeMode::Light);
        assert_eq!(ThemeMode::next_after(Some("light")), ThemeMode::Dark);
        assert_eq!(ThemeMode::next_after(Some("sepia")), ThemeMode::Dark);
        assert_eq!(ThemeMode::next_after(None), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_round_trip() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_load_preference_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_preference(&storage, ThemeMode::Dark), ThemeMode::Dark);

        let storage = MemoryStorage::with_item(THEME_KEY, "light");
        assert_eq!(load_preference(&storage, ThemeMode::Dark), ThemeMode::Light);

        let storage = MemoryStorage::with_item(THEME_KEY, "neon");
        assert_eq!(load_preference(&storage, ThemeMode::Light), ThemeMode::Light);
    }

    #[test]
    fn test_apply_theme_sets_root_attribute() {
        let mut page = Page::new();
        apply_theme(&mut page, ThemeMode::Light);
        assert_eq!(current_theme(&page), Some("light"));
    }

    #[test]
    fn test_save_preference() {
        let mut storage = MemoryStorage::new();
        save_preference(&mut storage, ThemeMode::Light).unwrap();
        assert_eq!(storage.get_item(THEME_KEY).as_deref(), Some("light"));
    }
}
