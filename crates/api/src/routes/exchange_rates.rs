//! Exchange rate routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::rejection_response;
use dropship_core::currency::DEFAULT_CURRENCY;

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exchange-rates", get(get_exchange_rates))
        .route("/exchange-rates/cache", delete(clear_cache))
}

/// Query parameters for getting exchange rates.
#[derive(Debug, Deserialize)]
pub struct ExchangeRatesQuery {
    /// Base currency code (defaults to USD).
    pub base: Option<String>,
}

/// GET `/exchange-rates?base=USD` - Rates relative to a base, with provenance.
async fn get_exchange_rates(
    State(state): State<AppState>,
    query: Result<Query<ExchangeRatesQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(&rejection),
    };
    let base = query.base.as_deref().unwrap_or(DEFAULT_CURRENCY);
    let lookup = state.currency.exchange_rates_detailed(base).await;
    (StatusCode::OK, Json(lookup)).into_response()
}

/// DELETE `/exchange-rates/cache` - Drop every cached snapshot.
async fn clear_cache(State(state): State<AppState>) -> impl IntoResponse {
    state.currency.clear_cache();
    info!("Exchange rate cache cleared via API");
    StatusCode::NO_CONTENT
}
