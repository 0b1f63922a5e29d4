//! Key/value backends for persisted sessions
//!
//! - `LocalStorageStore`: browser `localStorage` (the real deployment)
//! - `FileSessionStore`: `sessions.json` in the config dir (probe CLI)
//! - `MemorySessionStore`: SSR render and tests

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persistent string store. No expiry; entries live until removed.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

// =============================================================================
// Memory
// =============================================================================

#[derive(Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// =============================================================================
// File
// =============================================================================

/// Flat JSON object on disk, rewritten on every change
#[cfg(not(target_arch = "wasm32"))]
pub struct FileSessionStore {
    path: std::path::PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSessionStore {
    /// Open (or lazily create) `sessions.json` under `dir`
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        let path = dir.into().join("sessions.json");
        let entries = Self::load_from_disk(&path);
        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    fn load_from_disk(path: &std::path::Path) -> HashMap<String, String> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn save_to_disk(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&*self.entries.borrow())
            .map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.save_to_disk()
    }

    fn remove(&self, key: &str) {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            if let Err(e) = self.save_to_disk() {
                tracing::warn!("Failed to persist session removal: {}", e);
            }
        }
    }
}

// =============================================================================
// Browser localStorage
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Store for the current target
pub fn default_store() -> std::rc::Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(LocalStorageStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::rc::Rc::new(MemorySessionStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("userSession"), None);
        store.set("userSession", "{}").unwrap();
        assert_eq!(store.get("userSession").as_deref(), Some("{}"));
        store.remove("userSession");
        assert_eq!(store.get("userSession"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileSessionStore::new(dir.path());
            store
                .set("adminSession", r#"{"username":"admin","role":"admin"}"#)
                .unwrap();
        }

        let reopened = FileSessionStore::new(dir.path());
        assert_eq!(
            reopened.get("adminSession").as_deref(),
            Some(r#"{"username":"admin","role":"admin"}"#)
        );

        reopened.remove("adminSession");
        let again = FileSessionStore::new(dir.path());
        assert_eq!(again.get("adminSession"), None);
    }

    #[test]
    fn file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sessions.json"), "not json").unwrap();
        let store = FileSessionStore::new(dir.path());
        assert_eq!(store.get("userSession"), None);
    }
}
