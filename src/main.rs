#![allow(warnings)]
//! Travel AI Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod legacy;
mod models;
mod store;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = browser::document() else { return };
    let config = AppConfig::from_document(&document);
    if let Err(e) = console_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("[App] Logger unavailable: {}", e).into());
    }
    log::info!(target: "App", "Travel AI frontend starting");

    app::start(config);
}
