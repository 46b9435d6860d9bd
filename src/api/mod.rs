//! HTTP API over the generation facade
//!
//! Routes live under `/api/servers`. CORS is open to any origin, bodies are
//! capped at the configured limit and every request is traced.

pub mod errors;
pub mod handlers;

pub use errors::*;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::header;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::GeneratorService;
use crate::settings::ServerSettings;

/// Shared handler state
pub struct AppState {
    pub generator: GeneratorService,
}

/// Build the API router
pub fn router(generator: GeneratorService, body_limit_bytes: usize) -> Router {
    let state = Arc::new(AppState { generator });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION]);

    Router::new()
        .route("/api/servers/generate", post(handlers::generate))
        .route("/api/servers/preview", post(handlers::preview))
        .route("/api/servers/download", post(handlers::download))
        .route("/api/servers/health", get(handlers::health))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until Ctrl-C
pub async fn serve(generator: GeneratorService, settings: &ServerSettings) -> Result<()> {
    let app = router(generator, settings.body_limit_bytes);
    let addr = format!("{}:{}", settings.bind, settings.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %listener.local_addr()?, "HTTP API listening");

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutting down HTTP API");
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
