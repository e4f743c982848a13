//! Home Catalog App
//!
//! Mounts the screen that matches the page path.

use leptos::prelude::*;

use crate::components::{GalleryPage, TagManagerPage};
use crate::config::{AppConfig, Screen};
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(&config));
    log::info!(target: "app", "Starting {:?} screen against {}", config.screen, config.api_base);

    match config.screen {
        Screen::Gallery => view! { <GalleryPage /> }.into_any(),
        Screen::TagManager => view! { <TagManagerPage /> }.into_any(),
    }
}
