//! Concurrent fan-out across archive adapters.
//!
//! Every adapter is queried at once; the combined output is always in
//! adapter-registration order because [`futures::future::join_all`] yields
//! outputs in input order, whatever order the requests complete in.

use std::sync::Arc;

use crate::provider::ProviderAdapter;
use crate::types::{CanonicalRecord, Query};

/// Query every adapter and concatenate their records.
///
/// # Pipeline
///
/// 1. Fan out `query` to all adapters concurrently
/// 2. Wait for every adapter to finish (or time out inside its client)
/// 3. Log each failed adapter at warn level and treat it as no results
/// 4. Concatenate per-adapter records in registration order
///
/// Records are not deduplicated: an image returned by two archives appears
/// twice. Aggregation never fails; if every adapter fails the result is
/// empty.
pub async fn aggregate(
    query: &Query,
    adapters: &[Arc<dyn ProviderAdapter>],
) -> Vec<CanonicalRecord> {
    let futures: Vec<_> = adapters
        .iter()
        .map(|adapter| async move {
            let provider = adapter.provider();
            (provider, adapter.search(query).await)
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut records = Vec::new();
    for (provider, outcome) in outcomes {
        match outcome {
            Ok(provider_records) => {
                tracing::debug!(%provider, count = provider_records.len(), "provider returned results");
                records.extend(provider_records);
            }
            Err(err) => {
                tracing::warn!(provider = %provider, error = %err, "provider query failed");
            }
        }
    }
    records
}
