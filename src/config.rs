//! Configuration for the feed client
//!
//! Where the API endpoint, key, and search filters come from. Supports
//! programmatic construction, environment variables, and a JSON file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Pixabay-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

/// Environment variable overriding the endpoint
pub const ENV_API_URL: &str = "PIXABAY_API_URL";

// ============================================================================
// Search Options
// ============================================================================

/// Filters sent with every search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Image type filter ("all", "photo", "illustration", "vector")
    pub image_type: String,
    /// Orientation filter ("all", "horizontal", "vertical")
    pub orientation: String,
    /// Only return images suitable for all ages
    pub safesearch: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safesearch: true,
        }
    }
}

// ============================================================================
// Feed Config
// ============================================================================

/// Top-level configuration for the feed client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Search filters
    #[serde(default)]
    pub search: SearchOptions,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl FeedConfig {
    /// Create a config with the given API key and defaults for the rest
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
            search: SearchOptions::default(),
        }
    }

    /// Override the API endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Override the search filters
    #[must_use]
    pub fn with_search_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Build a config from `PIXABAY_API_KEY` and optional `PIXABAY_API_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| Error::missing_field(ENV_API_KEY))?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
