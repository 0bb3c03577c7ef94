//! CampusFind Frontend App
//!
//! Restores the store from local storage, keeps it persisted, and switches
//! between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use lost_found_core::{AppConfig, Page, Snapshot};

use crate::components::{AdminPanel, Dashboard, LandingPage, NavBar, ReportForm, UserProfile};
use crate::storage::LocalStoragePort;
use crate::store::{store_snapshot, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let port = LocalStoragePort::new(config.storage_key.clone());
    let store = Store::new(AppState::from_snapshot(Snapshot::load_or_seed(&port)));

    // Provide store and config to all children
    provide_context(store);
    provide_context(config);

    // Mirror the theme onto <html class="dark">
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    // Write the snapshot whenever a persisted field changes
    Effect::new(move |_| {
        let snapshot = store_snapshot(&store);
        match snapshot.save_to(&port) {
            Ok(()) => log::debug!("[APP] saved {} items", snapshot.items.len()),
            Err(e) => log::warn!("[APP] could not save snapshot: {}", e),
        }
    });

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match store.current_page().get() {
                    Page::Home => view! { <LandingPage /> }.into_any(),
                    Page::Dashboard => view! { <Dashboard /> }.into_any(),
                    Page::Report => view! { <ReportForm /> }.into_any(),
                    Page::Admin => view! { <AdminPanel /> }.into_any(),
                    Page::Profile => view! { <UserProfile /> }.into_any(),
                }}
            </main>
        </div>
    }
}
