//! Browser Storage Port
//!
//! Keeps the app snapshot in `window.localStorage` under one key.

use lost_found_core::snapshot::{StorageError, StorageResult, StoragePort};

#[derive(Debug, Clone)]
pub struct LocalStoragePort {
    key: String,
}

impl LocalStoragePort {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl StoragePort for LocalStoragePort {
    fn load(&self) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, blob: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(&self.key, blob)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}
