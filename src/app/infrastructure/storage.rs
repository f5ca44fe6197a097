//! Durable string key-value storage for user preferences.
//!
//! The store is a flat JSON object on disk. Reads and writes are synchronous
//! and local to the process.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::error::{AppError, Result};
use crate::app::domain::settings::config_dir;

pub trait PreferenceStorage {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as `preferences.json` in the config directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking the write
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Process-local storage. Stands in for the preference file when its
/// directory cannot be created; nothing is remembered across runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage that rejects every write, like a full or disabled store.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(AppError::Storage(format!("cannot write '{}': storage is read-only", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `<config dir>/folio/preferences.json`
pub fn default_preferences_path() -> PathBuf {
    let mut path = config_dir();
    path.push("preferences.json");
    path
}

/// Open the preference file at `path`, or in-memory storage when its
/// directory cannot be created.
pub fn open_preferences(path: PathBuf) -> Box<dyn PreferenceStorage> {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        log::warn!(
            "Preferences directory {} unusable ({}); theme choice will not be remembered",
            parent.display(),
            e
        );
        return Box::new(MemoryStorage::new());
    }
    Box::new(JsonFileStorage::new(path))
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("preferences.json"));
        assert_eq!(storage.get("portfolio-theme").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio").join("preferences.json");
        let mut storage = JsonFileStorage::new(&path);
        storage.set("portfolio-theme", "dark").unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("preferences.json"));
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.set("a", "3").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_a_read_error_but_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();
        let mut storage = JsonFileStorage::new(&path);
        assert!(storage.get("portfolio-theme").is_err());

        storage.set("portfolio-theme", "light").unwrap();
        assert_eq!(storage.get("portfolio-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_open_preferences_uses_file_when_directory_is_usable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio").join("preferences.json");
        let mut storage = open_preferences(path.clone());
        storage.set("portfolio-theme", "dark").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_preferences_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("folio");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("preferences.json");

        let mut storage = open_preferences(path.clone());
        storage.set("portfolio-theme", "dark").unwrap();
        assert_eq!(storage.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
        assert!(!path.exists());
    }

    #[test]
    fn test_memory_storage_read_only_rejects_writes() {
        let mut storage = MemoryStorage::with_entry("portfolio-theme", "dark").read_only();
        assert!(matches!(storage.set("portfolio-theme", "light"), Err(AppError::Storage(_))));
        assert_eq!(storage.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
    }
}
