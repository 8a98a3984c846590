//! Persistent key-value settings.

#[cfg(test)]
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::error::Result;

/// Key-value storage that survives across runs.
pub trait SettingsStore {
    /// Value stored under `key`, if any. Unreadable storage reads as empty.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, synchronously.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept as a flat JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` in the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("catalog-tui")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every entry of the settings object, whatever its value type.
    fn read_all(&self) -> Map<String, Value> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable settings {}: {e}", self.path.display());
            Map::new()
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory settings, lost when dropped.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut store = FileStore::new(&path);

        assert_eq!(store.get("theme"), None);
        store.set("other", "kept").unwrap();
        store.set("theme", "theme2").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("theme2"));
        assert_eq!(reopened.get("other").as_deref(), Some("kept"));
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("theme"), None);

        store.set("theme", "theme3").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("theme3"));
    }

    #[test]
    fn non_string_entries_are_read_around_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme": "theme2", "n": 1, "flags": {"beta": true}}"#).unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("theme").as_deref(), Some("theme2"));
        assert_eq!(store.get("n"), None);

        store.set("theme", "theme3").unwrap();
        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["theme"], "theme3");
        assert_eq!(saved["n"], 1);
        assert_eq!(saved["flags"]["beta"], true);
    }

    #[test]
    fn memory_store_holds_values() {
        let mut store = MemoryStore::with("theme", "theme1");
        assert_eq!(store.get("theme").as_deref(), Some("theme1"));
        store.set("theme", "theme3").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("theme3"));
    }
}
