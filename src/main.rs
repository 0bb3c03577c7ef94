//! CampusFind Frontend Entry Point

mod store;
mod storage;
mod logger;
mod app_config;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use lost_found_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match app_config::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[APP] {}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
