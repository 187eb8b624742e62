//! HTTP surface for the image search service.
//!
//! ## Endpoints
//!
//! - `GET /` — liveness string
//! - `GET /api/search?q=<query>&public_only=<true|false>` — aggregated results
//!
//! Search always answers `200`: upstream failures only shrink the result
//! list.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use pdimage_search::{SearchResponse, SearchService};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServiceError;

/// Body returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Public Domain Image Search API is running.";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query string of `GET /api/search`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Raw user query; absent is treated as empty.
    pub q: Option<String>,
    /// `"true"` (any case) restricts results to public-domain licenses.
    pub public_only: Option<String>,
}

impl SearchParams {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// A repeated parameter keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "public_only" => &mut params.public_only,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Whether the public-only filter was requested. Anything other than a
    /// case-insensitive `"true"` counts as false.
    pub fn public_only(&self) -> bool {
        self.public_only
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    service: Arc<SearchService>,
}

/// Build the service router over `service`.
pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/api/search", get(handle_search))
        .with_state(AppState { service })
}

// ---------------------------------------------------------------------------
// ImageSearchServer
// ---------------------------------------------------------------------------

/// The image search HTTP server running in a background task.
pub struct ImageSearchServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl ImageSearchServer {
    /// Start the server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(
        service: Arc<SearchService>,
        config: &ServerConfig,
    ) -> crate::error::Result<Self> {
        let app = router(service);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServiceError::Server(format!("bind to {bind_addr} failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServiceError::Server(format!("failed to get local addr: {e}")))?;

        info!("image search API listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("image search server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ImageSearchServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /` — liveness.
async fn handle_index() -> &'static str {
    LIVENESS_MESSAGE
}

/// `GET /api/search` — aggregated, optionally public-domain-only results.
async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SearchResponse> {
    let params = SearchParams::from_pairs(pairs);
    let public_only = params.public_only();
    let raw_query = params.q.as_deref().unwrap_or_default();
    Json(state.service.handle_search(raw_query, public_only).await)
}
