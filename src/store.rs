//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created once in `App` and handed down through context.

use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::domain::NewNotification;
use lost_found_core::{ItemFilter, ItemPatch, ItemRepository, NotificationList, Page, Repository, Snapshot, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All reported items, insertion order
    pub items: ItemRepository,
    /// Newest first
    pub notifications: NotificationList,
    pub current_user: Option<User>,
    pub dark_mode: bool,
    /// Page being shown (not persisted)
    pub current_page: Page,
    /// Dashboard search and facets (not persisted)
    pub filter: ItemFilter,
}

impl AppState {
    /// State restored from a persisted snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            items: ItemRepository::from_items(snapshot.items),
            notifications: NotificationList::from_notifications(snapshot.notifications),
            current_user: snapshot.current_user,
            dark_mode: snapshot.dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Persisted subset of the store; tracks every field it reads
pub fn store_snapshot(store: &AppStore) -> Snapshot {
    let dark_mode = store.dark_mode().get();
    let user = store.current_user().get();
    Snapshot::capture(
        dark_mode,
        &store.items().read(),
        user.as_ref(),
        &store.notifications().read(),
    )
}

pub fn store_navigate(store: &AppStore, page: Page) {
    log::debug!("[STORE] navigate to {}", page.as_str());
    store.current_page().set(page);
}

pub fn store_toggle_dark_mode(store: &AppStore) {
    store.dark_mode().update(|dark| *dark = !*dark);
}

/// Apply a patch to an item; unknown ids are logged by the repository
pub fn store_update_item(store: &AppStore, item_id: &str, patch: ItemPatch) {
    let _ = store.items().write().update(item_id, patch);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    let _ = store.items().write().delete(&item_id.to_string());
}

pub fn store_add_notification(store: &AppStore, notification: NewNotification) {
    store.notifications().write().add(notification);
}

pub fn store_mark_read(store: &AppStore, notification_id: &str) {
    let _ = store.notifications().write().mark_read(notification_id);
}

pub fn store_clear_notifications(store: &AppStore) {
    store.notifications().write().clear();
}
