//! Key-value byte stores backing the persisted snapshots.
//!
//! The storefront keeps each store's snapshot under a fixed string key, the
//! way a browser keeps it in local storage. [`MemoryStore`] serves tests and
//! throwaway sessions; [`FileStore`] keeps one JSON file per key on disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be stored by this backend.
    #[error("invalid storage key {0:?}: use letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// Filesystem operation failed.
    #[error("storage I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A process-local key-value byte store with a single writer.
///
/// Methods take `&self`: handles are cheap to clone and every store in a
/// session shares the same underlying map or directory.
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the write fails.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys map to file names, so they are restricted to a safe alphabet.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory store shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// File backend
// =============================================================================

/// Directory-backed store: key `cart` lives at `<dir>/cart.json`.
///
/// Writes go to `<key>.json.tmp` first and are then renamed into place, so a
/// crash mid-write never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    /// Root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, value).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("wish_list-2").is_ok());
        assert!(matches!(
            validate_key(""),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("cart", b"{}").unwrap();
        assert_eq!(other.get("cart").unwrap().as_deref(), Some(&b"{}"[..]));
        assert_eq!(other.len(), 1);

        other.remove("cart").unwrap();
        assert!(store.is_empty());
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data")).unwrap();

        assert!(store.get("cart").unwrap().is_none());

        store.set("cart", br#"{"items":[]}"#).unwrap();
        assert_eq!(
            store.get("cart").unwrap().as_deref(),
            Some(&br#"{"items":[]}"#[..])
        );
        assert!(store.path_for("cart").exists());
    }

    #[test]
    fn test_file_store_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("wishlist", b"[]").unwrap();

        let final_path = store.path_for("wishlist");
        assert!(final_path.exists());
        assert!(!final_path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.remove("cart").unwrap();
        store.set("cart", b"1").unwrap();
        store.remove("cart").unwrap();
        assert!(store.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", b"x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
