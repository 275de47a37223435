//! Liveness endpoint for the currency service.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version of `dropship-api`.
    pub version: &'static str,
    /// Base currencies with a cached rate snapshot.
    pub cached_bases: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "dropship-currency",
        version: env!("CARGO_PKG_VERSION"),
        cached_bases: state.currency.cached_bases(),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
