//! Navigation Bar Component
//!
//! Page buttons, dark mode toggle and the collapsible mobile menu.

use leptos::prelude::*;

use lost_found_core::Page;

use crate::store::{store_navigate, store_toggle_dark_mode, use_app_store, AppStateStoreFields};

/// One button per page; `after_click` runs after navigating
fn page_buttons(
    button_class: &'static str,
    after_click: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let store = use_app_store();
    let unread = move || store.notifications().read().unread_count();

    Page::ALL.into_iter().map(move |page| {
        let is_active = move || store.current_page().get() == page;
        view! {
            <button
                class=move || if is_active() { format!("{} active", button_class) } else { button_class.to_string() }
                on:click=move |_| {
                    store_navigate(&store, page);
                    after_click();
                }
            >
                <span>{page.label()}</span>
                {(page == Page::Profile).then(|| view! {
                    <Show when=move || { unread() > 0 }>
                        <span class="unread-badge">{unread}</span>
                    </Show>
                })}
            </button>
        }
    }).collect_view()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav-bar">
            <div class="nav-brand" on:click=move |_| store_navigate(&store, Page::Home)>
                <span class="nav-logo">"📍"</span>
                <h1 class="nav-title">"CampusFind"</h1>
            </div>

            <nav class="nav-links">
                {page_buttons("nav-btn", || {})}
            </nav>

            <div class="nav-controls">
                <button
                    class="theme-toggle"
                    title=move || if store.dark_mode().get() { "Light mode" } else { "Dark mode" }
                    on:click=move |_| store_toggle_dark_mode(&store)
                >
                    {move || if store.dark_mode().get() { "☀️" } else { "🌙" }}
                </button>
                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {page_buttons("mobile-nav-btn", move || set_menu_open.set(false))}
                </nav>
            </Show>
        </header>
    }
}
