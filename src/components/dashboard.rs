//! Dashboard Component
//!
//! Search box, category/status filters and the filtered item list.

use leptos::prelude::*;

use lost_found_core::filter::ALL_VALUE;
use lost_found_core::{Category, Facet, Item, ItemFilter, ItemStatus, Page};

use super::ItemCard;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (view_mode, set_view_mode) = signal(ViewMode::Grid);

    let filtered = Memo::new(move |_| {
        let filter = store.filter().get();
        store
            .items()
            .read()
            .filter(&filter)
            .into_iter()
            .cloned()
            .collect::<Vec<Item>>()
    });
    let total = move || store.items().read().len();
    let compact = Signal::derive(move || view_mode.get() == ViewMode::List);

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>"Lost & Found Dashboard"</h1>
                <p>"Browse reported items or narrow them down by category and status."</p>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by title, description or location..."
                    prop:value=move || store.filter().read().query.clone()
                    on:input=move |ev| {
                        store.filter().write().query = event_target_value(&ev);
                    }
                />

                <select
                    class="filter-select"
                    prop:value=move || store.filter().read().category.as_param()
                    on:change=move |ev| {
                        store.filter().write().category = Facet::from_param(&event_target_value(&ev));
                    }
                >
                    <option value=ALL_VALUE>"All Categories"</option>
                    {Category::ALL.into_iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || store.filter().read().status.as_param()
                    on:change=move |ev| {
                        store.filter().write().status = Facet::from_param(&event_target_value(&ev));
                    }
                >
                    <option value=ALL_VALUE>"All Status"</option>
                    {ItemStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>

                <Show when=move || !store.filter().read().is_empty()>
                    <button
                        class="secondary-btn clear-filters"
                        on:click=move |_| store.filter().set(ItemFilter::default())
                    >
                        "Clear filters"
                    </button>
                </Show>

                <div class="view-toggle">
                    <button
                        class=move || if view_mode.get() == ViewMode::Grid { "view-btn active" } else { "view-btn" }
                        title="Grid"
                        on:click=move |_| set_view_mode.set(ViewMode::Grid)
                    >
                        "▦"
                    </button>
                    <button
                        class=move || if view_mode.get() == ViewMode::List { "view-btn active" } else { "view-btn" }
                        title="List"
                        on:click=move |_| set_view_mode.set(ViewMode::List)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <p class="result-count">
                {move || format!("Showing {} of {} items", filtered.get().len(), total())}
            </p>

            <div class=move || if view_mode.get() == ViewMode::Grid { "item-grid" } else { "item-list" }>
                <For
                    each=move || filtered.get()
                    key=|item| (item.id.clone(), item.updated_at)
                    children=move |item| {
                        view! { <ItemCard item=item compact=compact /> }
                    }
                />
            </div>

            <Show when=move || filtered.get().is_empty()>
                <div class="empty-state">
                    <div class="empty-icon">"🔍"</div>
                    <h3>"No items found"</h3>
                    <p>"Try adjusting your search filters or report a new item."</p>
                    <button class="primary-btn" on:click=move |_| store_navigate(&store, Page::Report)>
                        "Report an Item"
                    </button>
                </div>
            </Show>
        </div>
    }
}
