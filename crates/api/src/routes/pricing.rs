//! Import-list repricing routes.

use std::collections::{BTreeMap, HashMap};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;
use crate::error::rejection_response;
use dropship_core::currency::{DEFAULT_CURRENCY, RateSource};
use dropship_core::pricing::{LocalPrice, PriceBoard, ProductPrice};

/// Creates the pricing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pricing/reprice", post(reprice))
}

/// Request body for repricing.
#[derive(Debug, Deserialize)]
pub struct RepriceRequest {
    /// Products with their raw USD supplier prices.
    pub products: Vec<ProductPrice>,
    /// Product id to destination country name.
    #[serde(default)]
    pub selections: HashMap<String, String>,
}

/// Response for repricing.
#[derive(Debug, Serialize)]
pub struct RepriceResponse {
    /// Local price per product id; unparsable prices are omitted.
    pub prices: BTreeMap<String, LocalPrice>,
    /// Provenance of the USD rates used.
    pub source: RateSource,
}

/// POST `/pricing/reprice` - Local prices for each product's destination.
async fn reprice(
    State(state): State<AppState>,
    request: Result<Json<RepriceRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(&rejection),
    };
    let lookup = state.currency.exchange_rates_detailed(DEFAULT_CURRENCY).await;
    let source = lookup.source;
    let board = PriceBoard::new(lookup.rates);

    let prices = board.reprice(&request.products, &request.selections);
    debug!(
        products = request.products.len(),
        priced = prices.len(),
        source = ?source,
        "Repriced import list"
    );

    (StatusCode::OK, Json(RepriceResponse { prices, source })).into_response()
}
