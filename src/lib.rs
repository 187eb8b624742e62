//! pdimage: public-domain image search API.
//!
//! Serves one search endpoint that fans each query out to the Library of
//! Congress and Wikimedia Commons, normalises their responses into a single
//! record shape, and optionally keeps only public-domain results.
//!
//! # Architecture
//!
//! - **Config**: TOML file with `[server]` and `[search]` tables
//! - **Search pipeline**: the [`pdimage_search`] crate (adapters,
//!   aggregation, license filter, query cache)
//! - **HTTP**: an axum router sharing one [`pdimage_search::SearchService`]
//!   across requests

pub mod config;
pub mod error;
pub mod server;

pub use config::{ServerConfig, ServiceConfig};
pub use error::{Result, ServiceError};
pub use server::ImageSearchServer;
