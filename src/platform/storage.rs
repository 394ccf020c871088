// StockManager - platform/storage.rs
//
// Durable key-value storage behind a trait so the orchestrator can be
// handed a real store, an in-memory stub, or nothing at all.
//
// - `FileStore` keeps all keys in one JSON object on disk. It is read once
//   at open and rewritten atomically (write temp, rename) on every `set`,
//   so a crash mid-write never corrupts the previous contents.
// - An unreadable or malformed file opens as an empty store; stored
//   preferences are never worth refusing to start over.
// - `NoopStore` models an environment with no persistent storage.

use crate::util::constants::MAX_STORAGE_FILE_SIZE;
use crate::util::error::StorageError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Text-valued key-value persistence capability.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `Ok(None)` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// In-memory and no-op stores
// =============================================================================

/// In-memory store for tests and `--ephemeral` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one entry. Does not count as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Current raw value under `key`.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Store for environments without persistent storage: reads find nothing,
/// writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// JSON-file-backed store living in the platform data directory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Resolve the storage file path from the platform data directory.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(crate::util::constants::STORAGE_FILE_NAME)
    }

    /// Open the store at `path`, loading whatever is already there.
    ///
    /// Never fails: a missing file is a normal first run, and an oversized,
    /// unreadable, or malformed file is logged and treated as empty. The
    /// file is not touched until the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path).unwrap_or_default();
        tracing::debug!(path = %path.display(), keys = values.len(), "Storage opened");
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.values).map_err(|e| StorageError::Serialise {
                path: self.path.clone(),
                source: e,
            })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| StorageError::Io {
            path: tmp.clone(),
            operation: "write",
            source: e,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            // Ignore any secondary error cleaning up the temp file.
            let _ = std::fs::remove_file(&tmp);
            StorageError::Io {
                path: self.path.clone(),
                operation: "rename",
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Storage flushed");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

/// Read and parse the storage file. `None` means "start empty".
fn load_values(path: &Path) -> Option<BTreeMap<String, String>> {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            // "Not found" is the normal first run.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot stat storage file");
            }
            return None;
        }
    };

    if size > MAX_STORAGE_FILE_SIZE {
        tracing::warn!(
            path = %path.display(),
            size,
            max = MAX_STORAGE_FILE_SIZE,
            "Storage file is too large; starting empty"
        );
        return None;
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read storage file");
        })
        .ok()?;

    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Storage file is malformed; starting empty"
            );
        })
        .ok()?;

    // Hand-edited files may hold non-string values; keep them as JSON text.
    let values = object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(text) => (key, text),
            other => {
                tracing::debug!(key = %key, value = %other, "Non-string storage value kept as JSON text");
                (key, other.to_string())
            }
        })
        .collect();
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        store.set("other", "x").unwrap();
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.peek("k"), Some("w"));
    }

    #[test]
    fn test_noop_store_never_returns_values() {
        let mut store = NoopStore;
        store.set("k", "v").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path);
        assert!(store.get("deploySidebar").unwrap().is_none());
        store.set("deploySidebar", "false").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.get("deploySidebar").unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_file_store_malformed_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.get("deploySidebar").unwrap().is_none());

        // The next write replaces the corrupt file with a valid one.
        store.set("deploySidebar", "true").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("deploySidebar").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_ignores_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let mut store = FileStore::open(&path);
        store.set("a", "1").unwrap();
        assert_eq!(FileStore::open(&path).get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_store_keeps_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, br#"{"theme":"dark"}"#).unwrap();

        let mut store = FileStore::open(&path);
        store.set("deploySidebar", "true").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("deploySidebar").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_keeps_keys_with_non_string_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, br#"{"deploySidebar": false, "theme": "dark", "zoom": 1.5}"#)
            .unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("deploySidebar").unwrap().as_deref(), Some("false"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.set("other", "x").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("zoom").unwrap().as_deref(), Some("1.5"));
        assert_eq!(reopened.get("deploySidebar").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_non_object_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, b"[1, 2, 3]").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get("deploySidebar").unwrap().is_none());
    }
}
