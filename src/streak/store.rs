//! Key-value persistence for session data
//!
//! The game only needs `get`/`set` of small string values; where they live is up to the
//! adapter.

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from a storage adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Minimal string key-value storage
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` if the key was never written
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile in-process storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory
///
/// Writes go to a temporary sibling first and are renamed into place, so a reader never
/// sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory, e.g. `~/.local/share/<app>`
    ///
    /// # Errors
    /// Returns `StoreError::NoDataDir` if the platform has no data directory.
    pub fn in_data_dir(app: &str) -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(base.join(app)))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        // Reversible: "wordleop:streak" becomes "wordleop_3astreak.json", "a_b" becomes "a_5fb"
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("_{byte:02x}"));
            }
        }

        Ok(self.dir.join(format!("{file_name}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "wordle_game_store_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        FileStore::new(dir)
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("key", "one").unwrap();
        store.set("key", "two").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let store = temp_store("missing");
        assert_eq!(store.get("wordleop:streak").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let mut store = temp_store("persist");
        store.set("wordleop:streak", "{\"current\":2}").unwrap();

        let reopened = FileStore::new(store.dir());
        assert_eq!(
            reopened.get("wordleop:streak").unwrap().as_deref(),
            Some("{\"current\":2}")
        );
        assert!(store.dir().join("wordleop_3astreak.json").exists());
        assert!(!store.dir().join("wordleop_3astreak.json.tmp").exists());

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn file_store_keeps_similar_keys_apart() {
        let mut store = temp_store("similar_keys");
        store.set("a:b", "colon").unwrap();
        store.set("a_b", "underscore").unwrap();
        store.set("a/b", "slash").unwrap();

        assert_eq!(store.get("a:b").unwrap().as_deref(), Some("colon"));
        assert_eq!(store.get("a_b").unwrap().as_deref(), Some("underscore"));
        assert_eq!(store.get("a/b").unwrap().as_deref(), Some("slash"));

        let _ = fs::remove_dir_all(store.dir());
    }

    #[test]
    fn file_store_rejects_empty_key() {
        let mut store = temp_store("empty_key");
        assert!(matches!(store.set("", "x"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
    }
}
