//! Item Card Component
//!
//! One item in the dashboard grid or list.

use leptos::prelude::*;

use lost_found_core::{Item, ItemStatus};

pub(crate) fn status_class(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Lost => "status-badge lost",
        ItemStatus::Found => "status-badge found",
        ItemStatus::Claimed => "status-badge claimed",
    }
}

#[component]
pub fn ItemCard(
    item: Item,
    /// Single-row layout for list mode
    #[prop(into)] compact: Signal<bool>,
) -> impl IntoView {
    let card_class = move || if compact.get() { "item-card compact" } else { "item-card" };
    let date = item.date.format("%b %-d, %Y").to_string();
    let description = item.description.clone();

    let thumbnail = match item.image.clone() {
        Some(src) => view! { <img class="item-image" src=src alt=item.title.clone() /> }.into_any(),
        None => view! { <div class="item-image placeholder">{item.category.emoji()}</div> }.into_any(),
    };

    view! {
        <article class=card_class>
            {thumbnail}
            <div class="item-body">
                <div class="item-header">
                    <h3 class="item-title">{item.title.clone()}</h3>
                    <span class=status_class(item.status)>{item.status.label()}</span>
                </div>
                <Show when=move || !compact.get()>
                    <p class="item-description">{description.clone()}</p>
                </Show>
                <div class="item-meta">
                    <span class="item-category">{item.category.label()}</span>
                    <span class="item-location">"📍 " {item.location.clone()}</span>
                    <span class="item-date">"📅 " {date}</span>
                    <span class="item-reporter">"👤 " {item.reporter.clone()}</span>
                </div>
            </div>
        </article>
    }
}
