//! Application Context
//!
//! API client and notifier provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::notify::BrowserNotifier;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi, LocalStorage>,
    pub notifier: BrowserNotifier,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: StoredValue::new_local(HttpApi::new(config.api_base.clone())),
            notifier: BrowserNotifier,
        }
    }

    /// Client handle to move into a spawned task
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
