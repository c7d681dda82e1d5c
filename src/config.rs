//! Client configuration resolved once at startup.
//!
//! The API base URL is baked in at build time through
//! `THUMBBOARD_API_BASE`; a WASM bundle has no process environment to read
//! at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend location used when `THUMBBOARD_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL prepended to every REST path, without a trailing slash.
    pub api_base: String,
}

impl ClientConfig {
    /// Resolve configuration from build-time settings, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let api_base = match option_env!("THUMBBOARD_API_BASE") {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                log::info!("THUMBBOARD_API_BASE not set, using default: {DEFAULT_API_BASE}");
                DEFAULT_API_BASE
            }
        };
        Self::with_api_base(api_base)
    }

    /// Build a configuration for an explicit base URL.
    #[must_use]
    pub fn with_api_base(api_base: &str) -> Self {
        Self { api_base: normalize_base(api_base) }
    }

    /// Absolute URL for a REST path such as `/boards`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
