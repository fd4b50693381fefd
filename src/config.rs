//! API configuration injected into every view controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deployments disagree on where the backend lives (absolute gateway URL,
//! same-origin relative paths, or a path prefix per service), so nothing
//! here is hardcoded beyond defaults. The browser build reads overrides from
//! `<meta>` tags; native builds read the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CUSTOMERS_PREFIX: &str = "/api/customers";
pub const DEFAULT_VISITS_PREFIX: &str = "/api/visits";
pub const DEFAULT_VETS_PREFIX: &str = "/api/vets";
pub const DEFAULT_GENAI_PATH: &str = "/api/genai";

pub const BASE_URL_KEY: &str = "PETCLINIC_API_BASE_URL";
pub const CUSTOMERS_PREFIX_KEY: &str = "PETCLINIC_CUSTOMERS_PREFIX";
pub const VISITS_PREFIX_KEY: &str = "PETCLINIC_VISITS_PREFIX";
pub const VETS_PREFIX_KEY: &str = "PETCLINIC_VETS_PREFIX";
pub const GENAI_PATH_KEY: &str = "PETCLINIC_GENAI_PATH";

/// Base URL plus per-service path prefixes for the REST backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address prefix prepended to every request. Empty means same-origin.
    pub base_url: String,
    pub customers_prefix: String,
    pub visits_prefix: String,
    pub vets_prefix: String,
    pub genai_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl ApiConfig {
    /// Config with default prefixes rooted at `base_url`.
    ///
    /// The base URL is not validated; only a trailing `/` is removed so
    /// prefixes can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            customers_prefix: DEFAULT_CUSTOMERS_PREFIX.to_owned(),
            visits_prefix: DEFAULT_VISITS_PREFIX.to_owned(),
            vets_prefix: DEFAULT_VETS_PREFIX.to_owned(),
            genai_path: DEFAULT_GENAI_PATH.to_owned(),
        }
    }

    /// Build a config from a key lookup.
    ///
    /// Keys:
    /// - `PETCLINIC_API_BASE_URL`: default empty (same-origin)
    /// - `PETCLINIC_CUSTOMERS_PREFIX`: default `/api/customers`
    /// - `PETCLINIC_VISITS_PREFIX`: default `/api/visits`
    /// - `PETCLINIC_VETS_PREFIX`: default `/api/vets`
    /// - `PETCLINIC_GENAI_PATH`: default `/api/genai`
    ///
    /// Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let mut config = Self::new(value(BASE_URL_KEY).unwrap_or_default());
        if let Some(prefix) = value(CUSTOMERS_PREFIX_KEY) {
            config.customers_prefix = normalize_prefix(&prefix);
        }
        if let Some(prefix) = value(VISITS_PREFIX_KEY) {
            config.visits_prefix = normalize_prefix(&prefix);
        }
        if let Some(prefix) = value(VETS_PREFIX_KEY) {
            config.vets_prefix = normalize_prefix(&prefix);
        }
        if let Some(path) = value(GENAI_PATH_KEY) {
            config.genai_path = normalize_prefix(&path);
        }
        config
    }

    /// Build a config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `<meta name="PETCLINIC_..." content="...">` tags,
    /// falling back to `window.location.origin` for the base URL.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let document = window.document();
        let origin = window.location().origin().ok();

        Self::from_lookup(|key| {
            let meta = document
                .as_ref()
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{key}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match meta {
                Some(content) if !content.trim().is_empty() => Some(content),
                _ if key == BASE_URL_KEY => origin.clone(),
                _ => None,
            }
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}
