//! Trait definition for pluggable archive adapters.
//!
//! Each upstream archive (Library of Congress, Wikimedia Commons)
//! implements [`ProviderAdapter`] to translate a [`Query`] into its own
//! request format and map the response into [`CanonicalRecord`]s.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::types::{CanonicalRecord, Provider, Query};

/// A pluggable archive backend.
///
/// Implementors keep three stages apart so each can be tested alone:
///
/// - request construction and the network call
/// - parsing the raw JSON body into a typed response schema
/// - mapping that schema into canonical records
///
/// All implementations must be `Send + Sync` so the aggregator can query
/// them concurrently from behind an `Arc<dyn ProviderAdapter>`.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Returns which [`Provider`] this adapter talks to.
    fn provider(&self) -> Provider;

    /// Query the archive and return its results in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, times out, answers
    /// with a non-success status, or the body is not the expected JSON.
    /// Missing optional fields are not errors; they take fallback values.
    async fn search(&self, query: &Query) -> Result<Vec<CanonicalRecord>, SearchError>;
}
