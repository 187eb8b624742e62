//! The public search entry point.

use std::sync::Arc;

use chrono::Utc;

use crate::cache::QueryCache;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::license::filter_records;
use crate::provider::ProviderAdapter;
use crate::providers::build_adapters;
use crate::types::{Provider, Query, SearchResponse};

use super::aggregate::aggregate;

/// Application context for searches: the registered adapters and the
/// query cache they feed.
///
/// Built once at startup and shared (behind an `Arc`) by every request.
pub struct SearchService {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    cache: QueryCache,
}

impl SearchService {
    /// Create a service over `adapters` (queried and concatenated in this
    /// order) backed by `cache`.
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, cache: QueryCache) -> Self {
        Self { adapters, cache }
    }

    /// Validate `config` and build the adapters it enables, sharing one
    /// HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(config)?;
        Ok(Self::new(
            build_adapters(config, &client),
            QueryCache::from_config(config),
        ))
    }

    /// Providers in registration order.
    pub fn providers(&self) -> Vec<Provider> {
        self.adapters.iter().map(|a| a.provider()).collect()
    }

    /// The query cache backing this service.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Run a search for `raw_query`.
    ///
    /// # Pipeline
    ///
    /// 1. Normalise the query; whitespace-only input returns
    ///    [`SearchResponse::empty()`] without `query` or `timestamp`
    /// 2. When `public_only` is false, a cached response is returned as is
    ///    (timestamp included)
    /// 3. Otherwise aggregate across all adapters
    /// 4. Apply the public-domain filter when `public_only` is set
    /// 5. Stamp the response with the normalised query and current UTC time
    /// 6. Cache it only when `public_only` is false
    ///
    /// Public-only searches neither read nor write the cache, so the cache
    /// only ever holds unfiltered responses.
    pub async fn handle_search(&self, raw_query: &str, public_only: bool) -> SearchResponse {
        let Some(query) = Query::normalize(raw_query) else {
            return SearchResponse::empty();
        };
        tracing::trace!(query = query.as_str(), public_only, "search requested");

        if !public_only {
            if let Some(cached) = self.cache.get(&query).await {
                tracing::debug!(count = cached.results.len(), "cache hit");
                return cached;
            }
        }

        let records = aggregate(&query, &self.adapters).await;
        let results = filter_records(records, public_only);
        let response = SearchResponse::new(results, query.clone(), Utc::now());

        if !public_only {
            self.cache.put(query, response.clone()).await;
        }

        tracing::debug!(count = response.results.len(), public_only, "search complete");
        response
    }
}
