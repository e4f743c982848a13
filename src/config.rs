//! Runtime Configuration
//!
//! Resolved once at startup from the hosting page.

/// Used when the page gives no origin (e.g. opened from disk)
const FALLBACK_API_BASE: &str = "http://localhost:8000";
/// `<meta name="catalog-api-base" content="https://...">` overrides the origin
const API_BASE_META: &str = "catalog-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme and host the `/api/...` paths are appended to
    pub api_base: String,
    pub log_level: log::LevelFilter,
    pub screen: Screen,
}

/// Which screen the page hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    TagManager,
}

impl Screen {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/tags" | "/tags.html" | "/static/tags.html" => Screen::TagManager,
            _ => Screen::Gallery,
        }
    }
}

fn default_log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

impl AppConfig {
    pub fn resolve(meta_base: Option<String>, origin: Option<String>, path: &str) -> Self {
        let usable = |b: String| Some(b.trim().to_string()).filter(|b| !b.is_empty() && b != "null");
        let api_base = meta_base
            .and_then(usable)
            .or_else(|| origin.and_then(usable))
            .unwrap_or_else(|| FALLBACK_API_BASE.to_string());

        Self {
            api_base,
            log_level: default_log_level(),
            screen: Screen::from_path(path),
        }
    }

    /// Read the meta override, origin and path of the current page
    pub fn from_window() -> Self {
        let window = web_sys::window();
        let location = window.as_ref().map(|w| w.location());
        let origin = location.as_ref().and_then(|l| l.origin().ok());
        let path = location
            .as_ref()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_default();
        let meta_base = window
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));

        Self::resolve(meta_base, origin, &path)
    }
}
