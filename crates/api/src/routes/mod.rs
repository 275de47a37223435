//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod conversion;
pub mod countries;
pub mod currencies;
pub mod exchange_rates;
pub mod health;
pub mod pricing;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(countries::routes())
        .merge(exchange_rates::routes())
        .merge(conversion::routes())
        .merge(pricing::routes())
}
