//! Home Catalog Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod creation;
mod error;
mod filter;
mod gallery;
mod generation;
mod logging;
mod models;
mod notify;
mod staging;
mod state;
mod tag_manager;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_window();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
