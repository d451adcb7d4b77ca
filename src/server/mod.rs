//! HTTP API layer.
//!
//! Thin by design: handlers validate query parameters, resolve the source
//! through the registry, call one scraper operation, and serialize the
//! result. All scraping policy lives below this layer.

pub mod routes;

use crate::registry::SourceRegistry;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state handed to every handler.
pub struct AppState {
    pub registry: SourceRegistry,
}

/// Build the full router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/api/v1/sources", get(routes::list_sources))
        .route("/api/v1/jobs/:source", get(routes::list_jobs))
        .route("/api/v1/jobs/:source/detail", get(routes::job_detail))
        .route("/api/v1/jobs/:source/categories", get(routes::categories))
        .route("/api/v1/jobs/:source/locations", get(routes::locations))
        .route("/api/v1/jobs/:source/job-types", get(routes::job_types))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {bind}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
