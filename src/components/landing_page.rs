//! Landing Page Component

use leptos::prelude::*;

use lost_found_core::Page;

use super::AnimatedCounters;
use crate::store::{store_navigate, use_app_store};

/// Quick action cards: (icon, title, description, target)
const QUICK_ACTIONS: &[(&str, &str, &str, Page)] = &[
    ("🔎", "Search Lost Items", "Browse through reported lost items", Page::Dashboard),
    ("📤", "Report Found Item", "Help someone by reporting a found item", Page::Report),
    ("📝", "Report Lost Item", "Tell the community what you are looking for", Page::Report),
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("📍", "Campus Locations", "Pick from the places people actually lose things"),
    ("📸", "Photo Previews", "Attach up to five photos to a report"),
    ("🏅", "Earn Badges", "Get recognised for helping others"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="landing-page">
            <section class="hero">
                <h1 class="hero-title">"Lost Something? Found Something?"</h1>
                <p class="hero-subtitle">
                    "The campus lost & found board: report items, browse what others found, and get things back to their owners."
                </p>
                <div class="hero-actions">
                    <button class="primary-btn" on:click=move |_| store_navigate(&store, Page::Report)>
                        "Report an Item"
                    </button>
                    <button class="secondary-btn" on:click=move |_| store_navigate(&store, Page::Dashboard)>
                        "Browse Items"
                    </button>
                </div>
            </section>

            <AnimatedCounters />

            <section class="quick-actions">
                {QUICK_ACTIONS.iter().map(|&(icon, title, description, page)| view! {
                    <button class="quick-action-card" on:click=move |_| store_navigate(&store, page)>
                        <span class="quick-action-icon">{icon}</span>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </button>
                }).collect_view()}
            </section>

            <section class="features">
                {FEATURES.iter().map(|&(icon, title, description)| view! {
                    <div class="feature-card">
                        <span class="feature-icon">{icon}</span>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
