//! Snapshot Persistence
//!
//! The persisted subset of app state (dark mode, items, current user,
//! notifications) is written as one JSON blob through a [`StoragePort`].
//! The browser port lives in the UI crate; [`MemoryStorage`] backs tests.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Item, Notification, User};
use crate::repository::{ItemRepository, NotificationList, Repository};
use crate::seed;

/// Bumped when the blob layout changes; older blobs are ignored
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value blob store holding a single snapshot
pub trait StoragePort {
    /// Stored blob, or `None` when nothing was saved yet
    fn load(&self) -> StorageResult<Option<String>>;

    fn save(&self, blob: &str) -> StorageResult<()>;
}

/// In-memory port
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> StorageResult<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub dark_mode: bool,
    pub items: Vec<Item>,
    pub current_user: Option<User>,
    pub notifications: Vec<Notification>,
}

impl Default for Snapshot {
    /// Seed data
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            dark_mode: false,
            items: seed::items(),
            current_user: Some(seed::current_user()),
            notifications: seed::notifications(),
        }
    }
}

impl Snapshot {
    pub fn capture(
        dark_mode: bool,
        items: &ItemRepository,
        current_user: Option<&User>,
        notifications: &NotificationList,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            dark_mode,
            items: items.list().to_vec(),
            current_user: current_user.cloned(),
            notifications: notifications.list().to_vec(),
        }
    }

    /// Read the stored snapshot. Missing or outdated blobs give `None`.
    pub fn load_from<P: StoragePort + ?Sized>(port: &P) -> StorageResult<Option<Snapshot>> {
        let Some(blob) = port.load()? else {
            return Ok(None);
        };
        let snapshot: Snapshot = serde_json::from_str(&blob)?;
        if snapshot.version != SNAPSHOT_VERSION {
            log::info!(
                "[SNAPSHOT] ignoring version {} (expected {})",
                snapshot.version,
                SNAPSHOT_VERSION
            );
            return Ok(None);
        }
        Ok(Some(snapshot))
    }

    /// Stored snapshot, falling back to seed data on any problem
    pub fn load_or_seed<P: StoragePort + ?Sized>(port: &P) -> Snapshot {
        match Self::load_from(port) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                log::info!("[SNAPSHOT] nothing stored, starting from seed data");
                Snapshot::default()
            }
            Err(e) => {
                log::warn!("[SNAPSHOT] {}, starting from seed data", e);
                Snapshot::default()
            }
        }
    }

    pub fn save_to<P: StoragePort + ?Sized>(&self, port: &P) -> StorageResult<()> {
        let blob = serde_json::to_string(self)?;
        port.save(&blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewNotification, NotificationKind};

    #[test]
    fn test_empty_storage_loads_none() {
        let port = MemoryStorage::new();
        assert!(Snapshot::load_from(&port).unwrap().is_none());
        assert_eq!(Snapshot::load_or_seed(&port).items.len(), 6);
    }

    #[test]
    fn test_save_then_load() {
        let port = MemoryStorage::new();
        let items = ItemRepository::from_items(seed::items());
        let mut notifications = NotificationList::from_notifications(seed::notifications());
        notifications.add(NewNotification {
            kind: NotificationKind::Info,
            title: "Welcome".to_string(),
            message: "Thanks for joining".to_string(),
        });
        let user = seed::current_user();

        let snapshot = Snapshot::capture(true, &items, Some(&user), &notifications);
        snapshot.save_to(&port).unwrap();

        let blob = port.blob().expect("nothing saved");
        let raw: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(raw["version"], SNAPSHOT_VERSION);
        assert_eq!(raw["darkMode"], true);
        assert!(raw.get("currentPage").is_none());

        let loaded = Snapshot::load_from(&port).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
        assert!(loaded.dark_mode);
        assert_eq!(loaded.notifications.len(), 3);
    }

    #[test]
    fn test_corrupt_blob_is_reported() {
        let port = MemoryStorage::with_blob("{not json");
        assert!(matches!(Snapshot::load_from(&port), Err(StorageError::Corrupt(_))));

        let fallback = Snapshot::load_or_seed(&port);
        assert_eq!(fallback, Snapshot::default());
    }

    #[test]
    fn test_old_version_is_ignored() {
        let mut old = Snapshot::default();
        old.version = 0;
        old.dark_mode = true;
        let port = MemoryStorage::with_blob(serde_json::to_string(&old).unwrap());

        assert!(Snapshot::load_from(&port).unwrap().is_none());
    }
}
