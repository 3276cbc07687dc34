//! Key-value preference storage
//!
//! The page keeps exactly one persisted preference (the theme). Storage is
//! injected so the page logic never reaches for a global: tests use
//! [`MemoryStorage`], the CLI uses [`FileStorage`] backed by
//! `~/.config/docsite/preferences.json`.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Client-local key-value storage capability
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one item
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file storage, written through on every update
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open storage at `path`; a missing or unreadable file starts empty
    pub fn open(path: &Path) -> Self {
        let items = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            items,
        }
    }

    /// Open the default preferences file, if a config directory exists
    pub fn open_default() -> Option<Self> {
        crate::config_paths::preferences_file().map(|path| Self::open(&path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }

        let contents = serde_json::to_string_pretty(&self.items)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.items.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("theme"), None);
        storage.set_item("theme", "light").unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut storage = FileStorage::open(&path);
        storage.set_item("theme", "light").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_ignores_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get_item("theme"), None);
    }
}
