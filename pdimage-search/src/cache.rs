//! Bounded in-memory cache of unfiltered search responses.
//!
//! Keyed by normalised query only: the public-only flag is applied after
//! the cache, so one entry serves both flag values. Uses [`moka`] for a
//! concurrent cache with capacity-bound eviction and an optional TTL.
//! Writes replace whole entries; an entry is never mutated in place.

use std::time::Duration;

use moka::future::Cache;

use crate::config::SearchConfig;
use crate::types::{Query, SearchResponse};

/// Concurrent query → response cache owned by a search service.
#[derive(Clone)]
pub struct QueryCache {
    inner: Cache<Query, SearchResponse>,
}

impl QueryCache {
    /// Create a cache holding at most `capacity` responses.
    ///
    /// `ttl_seconds == 0` disables time-based expiry.
    pub fn new(capacity: u64, ttl_seconds: u64) -> Self {
        let mut builder = Cache::builder().max_capacity(capacity);
        if ttl_seconds > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_seconds));
        }
        Self {
            inner: builder.build(),
        }
    }

    /// Create a cache sized from `config.cache_capacity` and
    /// `config.cache_ttl_seconds`.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.cache_capacity, config.cache_ttl_seconds)
    }

    /// Look up the cached response for `query`.
    ///
    /// Returns `Some(response)` on cache hit, `None` on miss.
    pub async fn get(&self, query: &Query) -> Option<SearchResponse> {
        self.inner.get(query).await
    }

    /// Store `response` for `query`, replacing any previous entry.
    pub async fn put(&self, query: Query, response: SearchResponse) {
        self.inner.insert(query, response).await;
    }

    /// Approximate number of cached entries. Evictions are applied lazily,
    /// so this can briefly exceed the capacity.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
