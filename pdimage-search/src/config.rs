//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which archives are queried and in what order,
//! timeouts, cache sizing and upstream endpoints. It deserializes from the
//! `[search]` table of the service's TOML config; every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::Provider;

/// Default Library of Congress photo search endpoint.
pub const DEFAULT_LOC_BASE_URL: &str = "https://www.loc.gov/photos/";

/// Default Wikimedia Commons API endpoint.
pub const DEFAULT_WIKIMEDIA_API_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// Configuration for the aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Archives to query. Results are concatenated in this order.
    pub providers: Vec<Provider>,
    /// Per-provider HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of cached query responses.
    pub cache_capacity: u64,
    /// How long cached responses live, in seconds. `0` keeps them until
    /// evicted by capacity.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent string. If `None`, a descriptive default naming
    /// this crate is sent.
    pub user_agent: Option<String>,
    /// Library of Congress endpoint settings.
    pub loc: LocConfig,
    /// Wikimedia Commons endpoint settings.
    pub wikimedia: WikimediaConfig,
}

/// Library of Congress endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocConfig {
    /// Photo search endpoint; queried with `q` and `fo=json`.
    pub base_url: String,
}

impl Default for LocConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOC_BASE_URL.to_owned(),
        }
    }
}

/// Wikimedia Commons endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikimediaConfig {
    /// MediaWiki action API endpoint.
    pub api_url: String,
    /// Number of search hits requested (`gsrlimit`).
    pub page_size: u32,
    /// Requested thumbnail width in pixels (`iiurlwidth`).
    pub thumb_width: u32,
}

impl Default for WikimediaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_WIKIMEDIA_API_URL.to_owned(),
            page_size: 10,
            thumb_width: 300,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            providers: Provider::all().to_vec(),
            timeout_seconds: 8,
            cache_capacity: 1000,
            cache_ttl_seconds: 0,
            user_agent: None,
            loc: LocConfig::default(),
            wikimedia: WikimediaConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `providers` must not be empty
    /// - `timeout_seconds` must be greater than 0
    /// - `cache_capacity` must be greater than 0
    /// - both endpoint URLs must parse as absolute URLs
    /// - `wikimedia.page_size` and `wikimedia.thumb_width` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.providers.is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SearchError::Config(
                "cache_capacity must be greater than 0".into(),
            ));
        }
        url::Url::parse(&self.loc.base_url)
            .map_err(|e| SearchError::Config(format!("invalid loc.base_url: {e}")))?;
        url::Url::parse(&self.wikimedia.api_url)
            .map_err(|e| SearchError::Config(format!("invalid wikimedia.api_url: {e}")))?;
        if self.wikimedia.page_size == 0 {
            return Err(SearchError::Config(
                "wikimedia.page_size must be greater than 0".into(),
            ));
        }
        if self.wikimedia.thumb_width == 0 {
            return Err(SearchError::Config(
                "wikimedia.thumb_width must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
