mod analysis;
mod catalog;
mod config;
mod errors;
mod extraction;
mod matching;
mod prediction;
mod quality;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::resolve_catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-intel v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog: JOB_CATALOG_PATH if set, otherwise the built-in postings
    let catalog = resolve_catalog(config.job_catalog_path.as_deref())
        .context("Failed to load job catalog")?;

    let state = AppState::new(config.clone(), catalog);
    info!(
        "Ranker backend: {} ({} jobs, max résumé {} bytes)",
        state.ranker.backend(),
        state.catalog.len(),
        config.max_resume_bytes
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
