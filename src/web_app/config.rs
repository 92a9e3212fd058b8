// web_app/config.rs - Admin UI configuration
//
// Values come from environment variables. The server reads them at startup
// (after loading `.env`); the WASM bundle only sees what was set when it
// was compiled, so build both halves with the same environment.

use serde::{Deserialize, Serialize};

pub const API_BASE_URL_VAR: &str = "CATALOG_API_BASE_URL";
pub const ASSUME_LOGGED_IN_VAR: &str = "CATALOG_ADMIN_ASSUME_LOGGED_IN";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/";
pub const ROOT_PATH: &str = "/";
pub const ADMIN_PANEL_PATH: &str = "/admin-panel";
pub const PRODUCTS_PATH: &str = "/admin-panel/products";

/// Configuration shared by the server and the hydrated client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the catalog REST API
    pub api_base_url: String,
    /// Where unauthenticated visitors are sent
    pub root_path: String,
    /// Target of the back control
    pub admin_panel_path: String,
    pub products_path: String,
    /// Start with the session flag set (for running without the auth service)
    pub assume_logged_in: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            root_path: ROOT_PATH.to_string(),
            admin_panel_path: ADMIN_PANEL_PATH.to_string(),
            products_path: PRODUCTS_PATH.to_string(),
            assume_logged_in: false,
        }
    }
}

impl AdminConfig {
    /// Loads the configuration, preferring runtime variables over the ones
    /// captured at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| compiled_var(key).map(str::to_string))
        })
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(flag) = lookup(ASSUME_LOGGED_IN_VAR) {
            config.assume_logged_in = parse_flag(&flag);
        }

        tracing::debug!("Admin config loaded: {:?}", config);
        config
    }
}

fn compiled_var(key: &str) -> Option<&'static str> {
    match key {
        API_BASE_URL_VAR => option_env!("CATALOG_API_BASE_URL"),
        ASSUME_LOGGED_IN_VAR => option_env!("CATALOG_ADMIN_ASSUME_LOGGED_IN"),
        _ => None,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
