//! Key-value storage for extension state
//!
//! Values are JSON, as in the browser's extension storage area.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage file {0} does not hold a JSON object")]
    NotAnObject(PathBuf),
}

/// Persistent key-value storage
pub trait ModeStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write a value
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Storage backed by one JSON object on disk.
///
/// Every write rewrites the whole file; a missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }
}

impl ModeStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        tracing::trace!("wrote {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hilite-store-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("highlightEnabled").unwrap(), None);
        store.set("highlightEnabled", json!(true)).unwrap();
        assert_eq!(store.get("highlightEnabled").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let path = temp_path("keys");
        fs::write(&path, r##"{"categories": [{"name": "News", "color": "#2196F3"}]}"##).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("highlightEnabled", json!(true)).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("highlightEnabled").unwrap(), Some(json!(true)));
        assert!(reopened.get("categories").unwrap().is_some());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_missing_and_invalid() {
        let path = temp_path("invalid");
        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("anything").unwrap(), None);

        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(store.get("anything"), Err(StoreError::NotAnObject(_))));
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(store.get("anything"), Err(StoreError::Json(_))));
        fs::remove_file(&path).unwrap();
    }
}
