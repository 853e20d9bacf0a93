//! Todos Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod state;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = AppConfig::from_document();
    log::set_max_level(config.level_filter());
    log::info!("todos api {} for owner {}", config.api_url, config.owner_id);

    mount_to_body(move || view! { <App config=config /> });
}
