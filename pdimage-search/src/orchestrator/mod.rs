//! Search orchestrator: normalise, cache lookup, fan-out, filter, cache store.
//!
//! This module fans a query out to every archive adapter concurrently,
//! concatenates their records in registration order, applies the
//! public-domain filter, and memoises unfiltered responses per query.

pub mod aggregate;
pub mod search;

pub use aggregate::aggregate;
pub use search::SearchService;
