//! Runtime configuration.
//!
//! Resolved once at start-up from built-in defaults, then compile-time
//! environment (`TRIZ_API_BASE`, `TRIZ_LANG`, `TRIZ_LOG`), then
//! `<meta name="triz:...">` tags in the hosting page. Blank values are
//! skipped at every layer.

use crate::api::Endpoints;
use crate::i18n::Language;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";

const META_PREFIX: &str = "triz:";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_language: Language,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_language: Language::Ru,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply(|key| compile_time_value(key).map(str::to_string));
        config.apply(meta_value);
        config
    }

    /// Override fields from `lookup`, keyed by `api-base`, `lang`, `log`.
    pub fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base) = get("api-base") {
            self.api_base = base.trim().to_string();
        }
        if let Some(lang) = get("lang") {
            self.default_language = Language::from_code(&lang);
        }
        if let Some(filter) = get("log") {
            self.log_filter = filter.trim().to_string();
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::from_base(&self.api_base)
    }
}

fn compile_time_value(key: &str) -> Option<&'static str> {
    match key {
        "api-base" => option_env!("TRIZ_API_BASE"),
        "lang" => option_env!("TRIZ_LANG"),
        "log" => option_env!("TRIZ_LOG"),
        _ => None,
    }
}

/// `content` of `<meta name="triz:{key}">`, if the page declares one.
fn meta_value(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, key);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
