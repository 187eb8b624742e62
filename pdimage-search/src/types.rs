//! Core types: canonical records, provider identity, normalized queries and
//! the search response payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single image result, normalized from whichever archive returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// URL of a thumbnail-sized rendition of the image.
    pub thumbnail: String,
    /// URL of the image's landing page at the archive (`"#"` when unknown).
    pub link: String,
    /// Display name of the archive that returned this record.
    pub source: String,
    /// Image title.
    pub title: String,
    /// License label as reported by the archive.
    pub license: String,
}

/// Upstream archives that pdimage-search can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Library of Congress photo search.
    LibraryOfCongress,
    /// Wikimedia Commons media API.
    WikimediaCommons,
}

impl Provider {
    /// Returns the display name used as [`CanonicalRecord::source`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::LibraryOfCongress => "Library of Congress",
            Self::WikimediaCommons => "Wikimedia Commons",
        }
    }

    /// Returns all available providers in default registration order.
    pub fn all() -> &'static [Provider] {
        &[Self::LibraryOfCongress, Self::WikimediaCommons]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized search query: trimmed and lowercased, never empty.
///
/// Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// Normalize raw user input. Returns `None` when nothing but whitespace
    /// remains.
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The payload returned for a search.
///
/// `query` and `timestamp` are absent only on the empty-query response,
/// which serializes as `{"results": []}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Records in provider-registration order, then upstream order.
    pub results: Vec<CanonicalRecord>,
    /// The normalized query these results answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// When the results were aggregated (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SearchResponse {
    /// The response for a query that normalizes to nothing.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            query: None,
            timestamp: None,
        }
    }

    /// A response for `query` aggregated at `timestamp`.
    pub fn new(results: Vec<CanonicalRecord>, query: Query, timestamp: DateTime<Utc>) -> Self {
        Self {
            results,
            query: Some(query),
            timestamp: Some(timestamp),
        }
    }
}
