//! Report Form Component
//!
//! Four-step wizard for reporting a lost or found item. Navigation buttons
//! are disabled while the current step is incomplete; submit adds one item
//! to the store and opens the dashboard.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use lost_found_core::domain::{NewNotification, NotificationKind, LOCATIONS};
use lost_found_core::wizard::MAX_PHOTOS;
use lost_found_core::{Page, Photo, ReportKind, ReportWizard, Step};

use super::CategorySelector;
use crate::store::{store_add_notification, store_navigate, use_app_store, AppStateStoreFields};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Release preview object URLs
fn release_photos(photos: &[Photo]) {
    for photo in photos {
        let _ = web_sys::Url::revoke_object_url(&photo.url);
    }
}

/// Turn the selected files into previewable photos
fn photos_from_input(input: &web_sys::HtmlInputElement) -> Vec<Photo> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter_map(|file| {
            web_sys::Url::create_object_url_with_blob(&file)
                .ok()
                .map(|url| Photo { name: file.name(), url })
        })
        .collect()
}

#[component]
fn StepIndicator(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {Step::ALL.into_iter().map(|step| {
                let class = move || {
                    let current = wizard.with(|w| w.step());
                    if step < current {
                        "step done"
                    } else if step == current {
                        "step active"
                    } else {
                        "step"
                    }
                };
                view! {
                    <li class=class>
                        <span class="step-number">{step.number()}</span>
                        <span class="step-title">{step.title()}</span>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

#[component]
fn KindStep(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let choice = move |kind: ReportKind, icon: &'static str, title: &'static str, blurb: &'static str| {
        let is_selected = move || wizard.with(|w| w.draft().kind == Some(kind));
        view! {
            <button
                type="button"
                class=move || if is_selected() { "kind-card active" } else { "kind-card" }
                on:click=move |_| wizard.update(|w| w.set_kind(kind))
            >
                <div class="kind-icon">{icon}</div>
                <h3>{title}</h3>
                <p>{blurb}</p>
            </button>
        }
    };

    view! {
        <div class="wizard-step">
            <h2>"What type of report?"</h2>
            <p class="step-hint">"Select whether you've lost an item or found one"</p>
            <div class="kind-grid">
                {choice(ReportKind::Lost, "😢", "I Lost Something", "Report an item you've lost and get help finding it")}
                {choice(ReportKind::Found, "🎉", "I Found Something", "Help return a found item to its owner")}
            </div>
        </div>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let category = Signal::derive(move || wizard.with(|w| w.draft().category));

    view! {
        <div class="wizard-step">
            <h2>"Item details"</h2>
            <label class="field">
                <span>"Item title *"</span>
                <input
                    type="text"
                    placeholder="e.g. Blue Backpack, iPhone 14, Student ID"
                    prop:value=move || wizard.with(|w| w.draft().title.clone())
                    on:input=move |ev| wizard.update(|w| w.set_title(event_target_value(&ev)))
                />
            </label>
            <div class="field">
                <span>"Category *"</span>
                <CategorySelector
                    current=category
                    on_change=move |c| wizard.update(|w| w.set_category(c))
                />
            </div>
        </div>
    }
}

#[component]
fn PlaceStep(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let photo_count = move || wizard.with(|w| w.draft().photos().len());

    let on_files = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let photos = photos_from_input(&input);
        let rejected = wizard.try_update(|w| w.attach_photos(photos)).unwrap_or_default();
        if !rejected.is_empty() {
            log::info!("[REPORT] dropped {} photos over the limit of {}", rejected.len(), MAX_PHOTOS);
            release_photos(&rejected);
        }
        input.set_value("");
    };

    let remove_photo = move |index: usize| {
        if let Some(Some(photo)) = wizard.try_update(|w| w.remove_photo(index)) {
            release_photos(&[photo]);
        }
    };

    view! {
        <div class="wizard-step">
            <h2>"Where and when?"</h2>
            <label class="field">
                <span>"Description *"</span>
                <textarea
                    rows="4"
                    placeholder="Colour, brand, distinguishing marks..."
                    prop:value=move || wizard.with(|w| w.draft().description.clone())
                    on:input=move |ev| wizard.update(|w| w.set_description(event_target_value(&ev)))
                ></textarea>
            </label>
            <div class="field-row">
                <label class="field">
                    <span>"Location *"</span>
                    <select
                        prop:value=move || wizard.with(|w| w.draft().location.clone())
                        on:change=move |ev| wizard.update(|w| w.set_location(event_target_value(&ev)))
                    >
                        <option value="">"Select a location"</option>
                        {LOCATIONS.iter().map(|&loc| view! {
                            <option value=loc>{loc}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Date"</span>
                    <input
                        type="date"
                        prop:value=move || wizard.with(|w| w.draft().date.format(DATE_FORMAT).to_string())
                        on:change=move |ev| {
                            if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), DATE_FORMAT) {
                                wizard.update(|w| w.set_date(date));
                            }
                        }
                    />
                </label>
            </div>
            <div class="field">
                <span>{move || format!("Photos ({}/{})", photo_count(), MAX_PHOTOS)}</span>
                <div class="photo-grid">
                    <For
                        each=move || wizard.with(|w| w.draft().photos().iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(index, photo)| (*index, photo.url.clone())
                        children=move |(index, photo)| view! {
                            <div class="photo-preview">
                                <img src=photo.url.clone() alt=photo.name.clone() />
                                <button type="button" class="photo-remove" on:click=move |_| remove_photo(index)>
                                    "✕"
                                </button>
                            </div>
                        }
                    />
                    <Show when=move || { photo_count() < MAX_PHOTOS }>
                        <label class="photo-upload">
                            <span>"📷 Add photos"</span>
                            <input type="file" accept="image/*" multiple on:change=on_files />
                        </label>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactStep(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let summary_row = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="summary-row">
                <span class="summary-label">{label}</span>
                <span class="summary-value">{move || value.get()}</span>
            </div>
        }
    };
    let field = move |read: fn(&ReportWizard) -> String| Signal::derive(move || wizard.with(read));

    view! {
        <div class="wizard-step">
            <h2>"Contact & review"</h2>
            <label class="field">
                <span>"Contact info *"</span>
                <input
                    type="text"
                    placeholder="Email or phone number"
                    prop:value=move || wizard.with(|w| w.draft().contact_info.clone())
                    on:input=move |ev| wizard.update(|w| w.set_contact_info(event_target_value(&ev)))
                />
            </label>
            <div class="summary">
                <h3>"Summary"</h3>
                {summary_row("Type", field(|w| match w.draft().kind {
                    Some(ReportKind::Lost) => "Lost".to_string(),
                    Some(ReportKind::Found) => "Found".to_string(),
                    None => String::new(),
                }))}
                {summary_row("Title", field(|w| w.draft().title.clone()))}
                {summary_row("Category", field(|w| w.draft().category.map(|c| c.label().to_string()).unwrap_or_default()))}
                {summary_row("Location", field(|w| w.draft().location.clone()))}
                {summary_row("Date", field(|w| w.draft().date.format("%b %-d, %Y").to_string()))}
                {summary_row("Photos", field(|w| w.draft().photos().len().to_string()))}
            </div>
        </div>
    }
}

#[component]
pub fn ReportForm() -> impl IntoView {
    let store = use_app_store();
    let wizard = RwSignal::new(ReportWizard::new(Utc::now().date_naive()));

    // Drafts are not kept across page switches
    on_cleanup(move || {
        wizard.try_with_untracked(|w| release_photos(w.draft().photos()));
    });

    // Only re-render the step body when the step itself changes
    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let can_proceed = move || wizard.with(|w| w.can_proceed());
    let on_last_step = move || step.get() == Step::Contact;

    let go_back = move |_| {
        let _ = wizard.try_update(|w| w.back());
    };
    let go_next = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.next()) {
            log::debug!("[REPORT] {}", e);
        }
    };
    let submit = move |_| {
        let reporter = store.current_user().get_untracked().map(|u| u.name);
        let outcome = wizard.try_update(|w| w.submit(&mut store.items().write(), reporter.as_deref()));
        match outcome {
            Some(Ok((item, photos))) => {
                log::info!("[REPORT] submitted {} '{}'", item.id, item.title);
                release_photos(&photos);
                store_add_notification(&store, NewNotification {
                    kind: NotificationKind::Success,
                    title: "Report Submitted".to_string(),
                    message: format!("\"{}\" is now listed as {}", item.title, item.status.as_str()),
                });
                store_navigate(&store, Page::Dashboard);
            }
            Some(Err(e)) => log::debug!("[REPORT] {}", e),
            None => {}
        }
    };

    view! {
        <div class="report-form">
            <h1>"Report an Item"</h1>
            <StepIndicator wizard=wizard />

            {move || match step.get() {
                Step::Kind => view! { <KindStep wizard=wizard /> }.into_any(),
                Step::Details => view! { <DetailsStep wizard=wizard /> }.into_any(),
                Step::Place => view! { <PlaceStep wizard=wizard /> }.into_any(),
                Step::Contact => view! { <ContactStep wizard=wizard /> }.into_any(),
            }}

            <div class="wizard-nav">
                <button
                    type="button"
                    class="secondary-btn"
                    disabled=move || !wizard.with(|w| w.can_go_back())
                    on:click=go_back
                >
                    "← Back"
                </button>
                <Show
                    when=on_last_step
                    fallback=move || view! {
                        <button type="button" class="primary-btn" disabled=move || !can_proceed() on:click=go_next>
                            "Next →"
                        </button>
                    }
                >
                    <button type="button" class="primary-btn submit" disabled=move || !can_proceed() on:click=submit>
                        "✓ Submit Report"
                    </button>
                </Show>
            </div>
        </div>
    }
}
