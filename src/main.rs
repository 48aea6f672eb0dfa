#![allow(warnings)]
//! Inventory Management Frontend Entry Point

mod models;
mod api;
mod source;
mod config;
mod context;
mod store;
mod numbering;
mod listing;
mod dashboard;
mod tab_loader;
mod cancel;
mod format;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("[APP] starting with {:?} data source at {}", config.data_source, config.api_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
