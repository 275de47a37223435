//! Currency conversion and formatting routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{error_response, rejection_response};
use dropship_core::currency::{DEFAULT_LOCALE, RateSource};
use dropship_shared::AppError;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", get(convert))
        .route("/format", get(format_amount))
}

/// Query parameters for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Amount as a decimal string.
    pub amount: String,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Amount as requested.
    pub amount: Decimal,
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Converted amount; equals `amount` when no rate was available.
    pub converted: Decimal,
    /// Rate applied, if any.
    pub rate: Option<Decimal>,
    /// Where the rate came from; absent for same-currency conversions.
    pub source: Option<RateSource>,
}

/// Query parameters for formatting.
#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    /// Amount as a decimal string.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// BCP 47 tag, defaults to `en-US`.
    pub locale: Option<String>,
}

/// Response for formatting.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    /// Display string.
    pub formatted: String,
}

fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("amount '{raw}' is not a decimal number")))
}

/// GET `/convert?amount=100&from=USD&to=EUR` - Convert an amount.
async fn convert(
    State(state): State<AppState>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(&rejection),
    };
    let amount = match parse_amount(&query.amount) {
        Ok(amount) => amount,
        Err(e) => return error_response(&e),
    };

    let conversion = state
        .currency
        .convert_detailed(amount, &query.from, &query.to)
        .await;

    (
        StatusCode::OK,
        Json(ConvertResponse {
            amount,
            from: query.from,
            to: query.to,
            converted: conversion.amount,
            rate: conversion.rate,
            source: conversion.source,
        }),
    )
        .into_response()
}

/// GET `/format?amount=1234.5&currency=EUR&locale=de-DE` - Localized display string.
async fn format_amount(
    State(state): State<AppState>,
    query: Result<Query<FormatQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(&rejection),
    };
    let amount = match parse_amount(&query.amount) {
        Ok(amount) => amount,
        Err(e) => return error_response(&e),
    };
    let locale = query.locale.as_deref().unwrap_or(DEFAULT_LOCALE);

    let formatted = state.currency.format(amount, &query.currency, locale);
    (StatusCode::OK, Json(FormatResponse { formatted })).into_response()
}
