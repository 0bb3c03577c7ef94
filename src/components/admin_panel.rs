//! Admin Panel Component
//!
//! Live status counts and moderation of the most recent reports.

use leptos::prelude::*;

use lost_found_core::{AppConfig, Item, ItemPatch, ItemStatus};

use super::item_card::status_class;
use crate::store::{store_remove_item, store_update_item, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Overview,
    Items,
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, hint: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">{icon}</div>
            <div class="stat-value">{move || value.get()}</div>
            <h3>{label}</h3>
            <p class="stat-hint">{hint}</p>
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.items().read().status_counts());
    let count = move |read: fn(&lost_found_core::repository::StatusCounts) -> String| {
        Signal::derive(move || counts.with(read))
    };

    view! {
        <div class="stats-grid">
            <StatCard icon="📦" label="Total Items" hint="All time" value=count(|c| c.total().to_string()) />
            <StatCard icon="❓" label="Lost" hint="Still missing" value=count(|c| c.lost.to_string()) />
            <StatCard icon="📥" label="Found" hint="Waiting for owners" value=count(|c| c.found.to_string()) />
            <StatCard icon="✅" label="Claimed" hint="Returned" value=count(|c| c.claimed.to_string()) />
            <StatCard icon="📈" label="Success Rate" hint="Claimed share" value=count(|c| format!("{}%", c.claimed_percent())) />
        </div>
    }
}

/// Table row with status actions; delete asks for confirmation inline
#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let id = item.id.clone();
    let status = item.status;
    let (confirming, set_confirming) = signal(false);
    let prompt = format!("Delete \"{}\"?", item.title);

    let set_status = {
        let id = id.clone();
        move |next: ItemStatus| store_update_item(&store, &id, ItemPatch::status(next))
    };

    let actions = move || {
        if confirming.get() {
            let id = id.clone();
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="small-btn danger" on:click=move |_| store_remove_item(&store, &id)>
                        "Delete"
                    </button>
                    <button class="small-btn" on:click=move |_| set_confirming.set(false)>
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                {ItemStatus::ALL.into_iter().filter(move |s| *s != status).map(|next| {
                    let set_status = set_status.clone();
                    view! {
                        <button class="small-btn" on:click=move |_| set_status(next)>
                            {format!("Mark {}", next.label())}
                        </button>
                    }
                }).collect_view()}
                <button class="small-btn danger" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <tr class="admin-item-row">
            <td>{item.title.clone()}</td>
            <td><span class=status_class(status)>{status.label()}</span></td>
            <td>{item.location.clone()}</td>
            <td>{item.date.format("%Y-%m-%d").to_string()}</td>
            <td>{item.reporter.clone()}</td>
            <td class="admin-actions">{actions}</td>
        </tr>
    }
}

/// Newest items first; `limit` of `None` shows all of them
#[component]
fn RecentItems(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let store = use_app_store();
    let limit = limit.unwrap_or(usize::MAX);
    let recent = Memo::new(move |_| store.items().read().recent(limit).cloned().collect::<Vec<Item>>());

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"Status"</th>
                    <th>"Location"</th>
                    <th>"Date"</th>
                    <th>"Reporter"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || recent.get()
                    key=|item| (item.id.clone(), item.updated_at)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let recent_limit = expect_context::<AppConfig>().recent_items;
    let (active_tab, set_active_tab) = signal(AdminTab::Overview);

    let tab_button = move |tab: AdminTab, label: &'static str| {
        view! {
            <button
                class=move || if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| set_active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="admin-panel">
            <h1>"Admin Dashboard"</h1>
            <div class="tab-bar">
                {tab_button(AdminTab::Overview, "Overview")}
                {tab_button(AdminTab::Items, "Items")}
            </div>
            {move || match active_tab.get() {
                AdminTab::Overview => view! {
                    <Overview />
                    <h2>"Recent Items"</h2>
                    <RecentItems limit=recent_limit />
                }.into_any(),
                AdminTab::Items => view! { <RecentItems /> }.into_any(),
            }}
        </div>
    }
}
