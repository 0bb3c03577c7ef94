//! User Profile Component
//!
//! Profile card, display-only stats, badges and notifications.

use leptos::prelude::*;

use lost_found_core::{Notification, Repository, User};

use crate::store::{store_clear_notifications, store_mark_read, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Overview,
    Badges,
    Notifications,
}

#[component]
fn ProfileOverview(user: User) -> impl IntoView {
    let joined = user.join_date.format("%B %-d, %Y").to_string();
    let stats = [
        ("Items Reported", user.stats.items_reported.to_string()),
        ("Items Claimed", user.stats.items_claimed.to_string()),
        ("Helpful Returns", user.stats.helpful_returns.to_string()),
        ("Success Rate", format!("{}%", user.stats.success_rate)),
    ];

    view! {
        <div class="profile-card">
            {user.avatar.clone().map(|src| view! { <img class="avatar" src=src alt=user.name.clone() /> })}
            <div class="profile-info">
                <h2>{user.name.clone()}</h2>
                <p class="profile-email">{user.email.clone()}</p>
                <p class="profile-meta">{format!("{} · Member since {}", user.role.label(), joined)}</p>
            </div>
        </div>
        <div class="stats-grid">
            {stats.into_iter().map(|(label, value)| view! {
                <div class="stat-card">
                    <div class="stat-value">{value}</div>
                    <div class="stat-label">{label}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn BadgeList(user: User) -> impl IntoView {
    view! {
        <div class="badge-grid">
            {user.badge_progress().map(|(badge, earned)| view! {
                <div class=if earned { "badge-card earned" } else { "badge-card locked" }>
                    <div class="badge-icon">{badge.icon}</div>
                    <h3>{badge.name}</h3>
                    <p>{badge.description}</p>
                    {(!earned).then(|| view! { <span class="badge-locked">"Not earned yet"</span> })}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn NotificationRow(notification: Notification) -> impl IntoView {
    let store = use_app_store();
    let id = notification.id.clone();
    let read = notification.read;

    view! {
        <li class=if read { "notification read" } else { "notification unread" }>
            <span class="notification-icon">{notification.kind.icon()}</span>
            <div class="notification-body">
                <h4>{notification.title.clone()}</h4>
                <p>{notification.message.clone()}</p>
                <span class="notification-date">{notification.date.format("%b %-d, %Y %H:%M").to_string()}</span>
            </div>
            <Show when=move || !read>
                <button class="small-btn" on:click={
                    let id = id.clone();
                    move |_| store_mark_read(&store, &id)
                }>
                    "Mark read"
                </button>
            </Show>
        </li>
    }
}

#[component]
fn NotificationFeed() -> impl IntoView {
    let store = use_app_store();
    let notifications = Memo::new(move |_| store.notifications().read().list().to_vec());

    view! {
        <div class="notifications">
            <div class="notifications-header">
                <h3>{move || format!("{} unread", store.notifications().read().unread_count())}</h3>
                <button
                    class="small-btn danger"
                    disabled=move || notifications.with(|n| n.is_empty())
                    on:click=move |_| store_clear_notifications(&store)
                >
                    "Clear all"
                </button>
            </div>
            <Show
                when=move || notifications.with(|n| !n.is_empty())
                fallback=|| view! { <p class="empty-state">"No notifications"</p> }
            >
                <ul class="notification-list">
                    <For
                        each=move || notifications.get()
                        key=|n| (n.id.clone(), n.read)
                        children=move |n| view! { <NotificationRow notification=n /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn UserProfile() -> impl IntoView {
    let store = use_app_store();
    let (active_tab, set_active_tab) = signal(ProfileTab::Overview);

    let tab_button = move |tab: ProfileTab, label: &'static str| {
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
        <div class="user-profile">
            <div class="tab-bar">
                {tab_button(ProfileTab::Overview, "Overview")}
                {tab_button(ProfileTab::Badges, "Badges")}
                {tab_button(ProfileTab::Notifications, "Notifications")}
            </div>
            {move || {
                let tab = active_tab.get();
                match (tab, store.current_user().get()) {
                    (ProfileTab::Notifications, _) => view! { <NotificationFeed /> }.into_any(),
                    (_, None) => view! { <p class="empty-state">"No profile loaded"</p> }.into_any(),
                    (ProfileTab::Overview, Some(user)) => view! { <ProfileOverview user=user /> }.into_any(),
                    (ProfileTab::Badges, Some(user)) => view! { <BadgeList user=user /> }.into_any(),
                }
            }}
        </div>
    }
}
