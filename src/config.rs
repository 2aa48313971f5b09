//! Relay configuration
//!
//! Loaded once at startup and shared read-only with every component.

use crate::error::RelayError;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_EXCHANGE_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_MEDIASTACK_BASE_URL: &str = "http://api.mediastack.com";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoints for the three upstream providers.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub google_api_key: String,
    pub mediastack_api_key: String,
    pub exchange_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub exchange_base_url: String,
    pub mediastack_base_url: String,
    pub static_dir: PathBuf,
    pub port: u16,
    /// Applied to every outbound request.
    pub http_timeout: Duration,
}

impl RelayConfig {
    /// Reads configuration from process environment variables.
    ///
    /// | Variable                | Default                                             |
    /// |-------------------------|-----------------------------------------------------|
    /// | `GOOGLE_API_KEY`        | required                                            |
    /// | `MEDIASTACK_API_KEY`    | required                                            |
    /// | `EXCHANGE_API_KEY`      | required                                            |
    /// | `PORT`                  | `3000`                                              |
    /// | `GEMINI_MODEL`          | `gemini-pro`                                        |
    /// | `GEMINI_API_BASE_URL`   | `https://generativelanguage.googleapis.com/v1beta`  |
    /// | `EXCHANGE_API_BASE_URL` | `https://v6.exchangerate-api.com/v6`                |
    /// | `MEDIASTACK_BASE_URL`   | `http://api.mediastack.com`                         |
    /// | `STATIC_DIR`            | `static`                                            |
    /// | `HTTP_TIMEOUT_SECS`     | `10`                                                |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RelayError::Config(format!("{} is not set", key)))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = optional("PORT", &DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| RelayError::Config(format!("PORT is not a valid port: {}", e)))?;

        let timeout_secs = optional("HTTP_TIMEOUT_SECS", &DEFAULT_HTTP_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| RelayError::Config(format!("HTTP_TIMEOUT_SECS is not a number: {}", e)))?;
        if timeout_secs == 0 {
            return Err(RelayError::Config(
                "HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            google_api_key: required("GOOGLE_API_KEY")?,
            mediastack_api_key: required("MEDIASTACK_API_KEY")?,
            exchange_api_key: required("EXCHANGE_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: trim_base(optional("GEMINI_API_BASE_URL", DEFAULT_GEMINI_BASE_URL)),
            exchange_base_url: trim_base(optional("EXCHANGE_API_BASE_URL", DEFAULT_EXCHANGE_BASE_URL)),
            mediastack_base_url: trim_base(optional("MEDIASTACK_BASE_URL", DEFAULT_MEDIASTACK_BASE_URL)),
            static_dir: PathBuf::from(optional("STATIC_DIR", DEFAULT_STATIC_DIR)),
            port,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
