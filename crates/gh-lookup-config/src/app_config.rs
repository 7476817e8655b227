//! Application configuration
//!
//! Configuration loaded from `.gh-user-lookup.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Application configuration loaded from .gh-user-lookup.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base address of the GitHub REST API (no trailing slash needed)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound for each of the two lookup requests, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml_or_default(&content),
            None => {
                log::debug!("No config file found, using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on malformed input
    pub fn from_toml_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    /// API base address without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
