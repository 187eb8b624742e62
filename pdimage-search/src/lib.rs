//! # pdimage-search
//!
//! Aggregated image search across public-domain media archives.
//!
//! One query is fanned out to every configured archive, each archive's
//! JSON response is mapped into a [`CanonicalRecord`], and the records are
//! concatenated in a stable provider order. Results can be narrowed to a
//! fixed public-domain license allow-list.
//!
//! ## Design
//!
//! - Library of Congress and Wikimedia Commons adapters behind one
//!   [`ProviderAdapter`] trait
//! - Adapters run concurrently; output order is registration order, then
//!   upstream order
//! - Graceful degradation: a failing archive contributes no records and
//!   the failure is logged, never surfaced to the caller
//! - Bounded in-memory cache of unfiltered responses, keyed by normalised
//!   query
//! - No deduplication across archives
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> pdimage_search::Result<()> {
//! let service = pdimage_search::SearchService::from_config(&Default::default())?;
//! let response = service.handle_search("lighthouse", true).await;
//! for record in &response.results {
//!     println!("{} ({}): {}", record.title, record.license, record.link);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod license;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod types;

pub use cache::QueryCache;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use orchestrator::SearchService;
pub use provider::ProviderAdapter;
pub use types::{CanonicalRecord, Provider, Query, SearchResponse};
