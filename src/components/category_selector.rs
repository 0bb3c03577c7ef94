//! Category Selector Component
//!
//! Grid of category buttons used by the report form.

use leptos::prelude::*;

use lost_found_core::Category;

#[component]
pub fn CategorySelector(
    #[prop(into)] current: Signal<Option<Category>>,
    on_change: impl Fn(Category) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="category-selector">
            {Category::ALL.into_iter().map(|category| {
                let is_selected = move || current.get() == Some(category);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| on_change(category)
                    >
                        <span class="category-emoji">{category.emoji()}</span>
                        <span class="category-label">{category.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
