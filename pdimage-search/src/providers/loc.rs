//! Library of Congress photo search.
//!
//! Everything in the LOC photo collection that this endpoint returns is
//! treated as public domain, so records carry a fixed license label.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SearchError;
use crate::http;
use crate::provider::ProviderAdapter;
use crate::types::{CanonicalRecord, Provider, Query};

use super::FALLBACK_LINK;
use super::lenient::{lenient, lenient_list};

/// Title used when an item has none.
pub const FALLBACK_TITLE: &str = "LOC Image";

/// License label attached to every LOC record.
pub const LICENSE: &str = "Public Domain";

/// Top-level LOC search response (`fo=json`).
///
/// Fields of an unexpected type read as absent and malformed hits are
/// dropped, so one drifted item never costs the whole page.
#[derive(Debug, Default, Deserialize)]
pub struct LocResponse {
    /// Search hits; absent or `null` means no hits.
    #[serde(default, deserialize_with = "lenient_list")]
    pub results: Option<Vec<LocItem>>,
}

/// One LOC search hit.
#[derive(Debug, Default, Deserialize)]
pub struct LocItem {
    /// Image renditions, smallest first. Items without one are skipped.
    #[serde(default, deserialize_with = "lenient_list")]
    pub image: Option<Vec<String>>,
    /// Item landing page.
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// Library of Congress adapter.
pub struct LocAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl LocAdapter {
    /// Create an adapter that queries `base_url` with `client`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for LocAdapter {
    fn provider(&self) -> Provider {
        Provider::LibraryOfCongress
    }

    async fn search(&self, query: &Query) -> Result<Vec<CanonicalRecord>, SearchError> {
        tracing::trace!(query = query.as_str(), "LOC search");

        let request = self
            .client
            .get(&self.base_url)
            .query(&[("q", query.as_str()), ("fo", "json")]);
        let body = http::fetch_text(request, self.provider()).await?;

        let records = map_records(parse_response(&body)?);
        tracing::debug!(count = records.len(), "LOC results parsed");
        Ok(records)
    }
}

/// Parse a raw LOC response body.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the body is not a JSON object of the
/// expected shape.
pub fn parse_response(body: &str) -> Result<LocResponse, SearchError> {
    serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("LOC response: {e}")))
}

/// Map a parsed LOC response into canonical records, keeping upstream order.
pub fn map_records(response: LocResponse) -> Vec<CanonicalRecord> {
    response
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| {
            let thumbnail = item.image?.into_iter().next()?;
            Some(CanonicalRecord {
                thumbnail,
                link: item.url.unwrap_or_else(|| FALLBACK_LINK.to_owned()),
                source: Provider::LibraryOfCongress.name().to_owned(),
                title: item.title.unwrap_or_else(|| FALLBACK_TITLE.to_owned()),
                license: LICENSE.to_owned(),
            })
        })
        .collect()
}
