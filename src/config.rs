use dioxus::prelude::*;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WANTED_API_URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),
    #[error("WANTED_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Application configuration
/// In debug builds a `.env` file is loaded first; environment variables win.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the board API server
    pub api_base_url: String,
    /// API token from the environment. The keychain is consulted when unset.
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded .env file");
        } else {
            debug!("No .env file found, using process environment");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a specific env file, without touching the
    /// process environment
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let values: Vec<(String, String)> = dotenvy::from_path_iter(path)
            .map(|iter| iter.filter_map(Result::ok).collect())
            .unwrap_or_default();

        Self::from_lookup(|key| {
            values
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup("WANTED_API_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) if url.trim().is_empty() => DEFAULT_API_URL.to_string(),
            Some(url) => return Err(ConfigError::InvalidApiUrl(url)),
            None => DEFAULT_API_URL.to_string(),
        };

        let api_token = lookup("WANTED_API_TOKEN").filter(|t| !t.trim().is_empty());

        let request_timeout = match lookup("WANTED_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        info!("Config: API server {}", api_base_url);

        Ok(Self {
            api_base_url,
            api_token,
            request_timeout,
        })
    }
}

/// Hook to access the application configuration from components
pub fn use_config() -> Config {
    use_context::<crate::ui::AppContext>().config
}
