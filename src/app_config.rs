//! Config Loading
//!
//! Optional overrides come from `<script id="app-config" type="application/json">`
//! in index.html.

use lost_found_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Page config, or defaults when the element is absent
pub fn load() -> Result<AppConfig, String> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(text) if !text.trim().is_empty() => {
            AppConfig::from_json(&text).map_err(|e| format!("bad #{}: {}", CONFIG_ELEMENT_ID, e))
        }
        _ => Ok(AppConfig::default()),
    }
}
