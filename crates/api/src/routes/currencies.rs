//! Currency listing routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::AppState;
use crate::error::rejection_response;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/{code}", get(get_currency))
}

/// GET `/currencies` - List all supported currencies, sorted by code.
async fn list_currencies(State(state): State<AppState>) -> impl IntoResponse {
    let mut currencies = state.currency.supported_currencies();
    currencies.sort_by_key(|c| c.code);

    (StatusCode::OK, Json(json!({ "currencies": currencies })))
}

/// GET `/currencies/{code}` - Currency metadata; the USD record for unknown codes.
async fn get_currency(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Response {
    match code {
        Ok(Path(code)) => {
            (StatusCode::OK, Json(*state.currency.currency_info(&code))).into_response()
        }
        Err(rejection) => rejection_response(&rejection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, create_test_state};
    use axum::body::Body;
    use axum::http::Request;
    use rstest::rstest;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (_, state) = create_test_state();
        let response = routes()
            .with_state(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        (response.status(), body_json(response).await)
    }

    #[tokio::test]
    async fn test_list_currencies_sorted() {
        let (status, body) = get_json("/currencies").await;

        assert_eq!(status, StatusCode::OK);
        let codes: Vec<&str> = body["currencies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap())
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert!(codes.contains(&"KWD"));
    }

    #[rstest]
    #[case("/currencies/JPY", "JPY", "¥", 0)]
    #[case("/currencies/KWD", "KWD", "KD", 3)]
    #[case("/currencies/XXX", "USD", "$", 2)]
    #[tokio::test]
    async fn test_get_currency(
        #[case] uri: &str,
        #[case] code: &str,
        #[case] symbol: &str,
        #[case] digits: u64,
    ) {
        let (status, body) = get_json(uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], code);
        assert_eq!(body["symbol"], symbol);
        assert_eq!(body["decimalDigits"], digits);
    }

    #[tokio::test]
    async fn test_get_currency_rejects_invalid_utf8_code() {
        let (status, body) = get_json("/currencies/%FF").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
