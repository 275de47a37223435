//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes over the currency service
//! - JSON error responses for `AppError`

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use dropship_core::currency::CurrencyService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Currency metadata, rates, conversion and formatting.
    pub currency: Arc<CurrencyService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
