//! Image search API server binary.
//!
//! Reads its config from `$PDIMAGE_CONFIG`, else the default config path if
//! that file exists, else built-in defaults. Runs until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use pdimage::{ImageSearchServer, ServiceConfig};
use pdimage_search::SearchService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pdimage=info,pdimage_search=info")),
        )
        .init();

    let config = load_config()?;
    let service = SearchService::from_config(&config.search)?;
    tracing::info!(providers = ?service.providers(), "search service ready");

    let server = ImageSearchServer::start(Arc::new(service), &config.server).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!(addr = %server.addr(), "shutting down");
    server.shutdown();
    Ok(())
}

fn load_config() -> anyhow::Result<ServiceConfig> {
    if let Some(path) = std::env::var_os("PDIMAGE_CONFIG") {
        let path = PathBuf::from(path);
        tracing::info!(path = %path.display(), "loading config");
        return Ok(ServiceConfig::from_file(&path)?);
    }

    let default_path = ServiceConfig::default_config_path();
    if default_path.exists() {
        tracing::info!(path = %default_path.display(), "loading config");
        Ok(ServiceConfig::from_file(&default_path)?)
    } else {
        Ok(ServiceConfig::default())
    }
}
