mod catalog;
mod config;
mod diagnosis;
mod errors;
mod report;
mod routes;
mod session;
mod state;
mod survey;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::InMemorySessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GLOW v{}", env!("CARGO_PKG_VERSION"));

    // Catalog: compiled-in unless CATALOG_PATH points at an override
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };
    info!("Catalog ready ({} products)", catalog.len());

    let session_ttl = chrono::Duration::from_std(config.session_ttl)
        .context("SESSION_TTL_SECS is out of range")?;
    let sessions = Arc::new(InMemorySessionStore::new(session_ttl));
    info!("In-memory session store initialized (ttl {:?})", config.session_ttl);

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
