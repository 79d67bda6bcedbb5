mod ats;
mod config;
mod cover_letters;
mod errors;
mod models;
mod resume;
mod routes;
mod snapshots;
mod state;
mod storage;
mod suggestions;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::ats::scoring::AtsLimits;
use crate::ats::{KeywordMatchScorer, StopWords};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileBlobStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé API v{}", env!("CARGO_PKG_VERSION"));

    // Stop words: built-in list unless a file is configured
    let stop_words = match &config.stop_words_path {
        Some(path) => {
            let loaded = StopWords::load(path)?;
            if loaded.is_empty() {
                warn!("Stop-word file {} has no entries", path.display());
            }
            loaded
        }
        None => StopWords::default(),
    };
    info!("Loaded {} stop words", stop_words.len());
    let match_scorer = Arc::new(KeywordMatchScorer::new(stop_words, AtsLimits::default()));

    let store = Arc::new(FileBlobStore::open(&config.data_dir).await?);
    info!("Storing documents under {}", config.data_dir.display());

    let state = AppState::new(store, match_scorer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins)?);

    let addr = SocketAddr::new(config.bind_addr, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Only the wizard's own origins may call the API from a browser.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).with_context(|| format!("Invalid origin '{o}'")))
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
