//! Application configuration.
//!
//! The WASM bundle cannot read environment variables at runtime, so the API
//! base URL is fixed at compile time via `ITEMDECK_API_URL`. The server
//! binary additionally loads its configuration with `Config::from_env()`
//! after calling `dotenvy::dotenv()`.

/// API base used when `ITEMDECK_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Base URL for the REST backend.
pub fn api_base() -> &'static str {
    option_env!("ITEMDECK_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Join an endpoint path onto the API base.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base().trim_end_matches('/'), path)
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// REST backend base URL the bundle was built against
    /// Example: https://api.example.com
    pub api_base: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("ITEMDECK_API_URL").ok(),
        }
    }

    /// Check if an explicit API base is configured
    pub fn has_api_base(&self) -> bool {
        self.api_base.is_some()
    }
}
