//! Shared HTTP client for upstream archive requests.
//!
//! One [`reqwest::Client`] is built per [`SearchConfig`] and cloned into
//! every provider adapter, so connection pools are shared across providers.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Provider;
use std::time::Duration;

/// User-Agent sent when the config does not override it. Wikimedia asks API
/// clients to identify themselves instead of posing as a browser.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "pdimage-search/",
    env!("CARGO_PKG_VERSION"),
    " (public-domain image search aggregator)"
);

/// Build a [`reqwest::Client`] configured for archive API calls.
///
/// The client has:
/// - Per-request timeout from config
/// - Descriptive User-Agent (or custom if configured)
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Send `request` and return the body of a 2xx response.
///
/// Non-success statuses become [`SearchError::Http`]; timeouts become
/// [`SearchError::Timeout`].
pub(crate) async fn fetch_text(
    request: reqwest::RequestBuilder,
    provider: Provider,
) -> Result<String, SearchError> {
    let response = request
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SearchError::from_reqwest(provider.name(), e))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("{provider} HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::from_reqwest(provider.name(), e))?;

    tracing::trace!(%provider, bytes = body.len(), "provider response received");
    Ok(body)
}
