//! Country to currency resolution routes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;
use crate::error::rejection_response;
use dropship_core::currency::country::COUNTRIES;

/// Creates the country routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/currency", get(currency_by_name))
        .route("/countries/{code}/currency", get(currency_by_code))
}

/// Query parameters for a lookup by display name.
#[derive(Debug, Deserialize)]
pub struct CountryNameQuery {
    /// Exact country display name.
    pub name: String,
}

/// Response for a country currency lookup.
#[derive(Debug, Serialize)]
pub struct CountryCurrencyResponse {
    /// The country as requested.
    pub country: String,
    /// Resolved currency code (`USD` when unmapped).
    pub currency: &'static str,
}

/// GET `/countries` - List supported countries.
async fn list_countries() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "countries": COUNTRIES })))
}

/// GET `/countries/{code}/currency` - Currency for an ISO country code.
async fn currency_by_code(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(code) = match code {
        Ok(code) => code,
        Err(rejection) => return rejection_response(&rejection),
    };
    let currency = state.currency.currency_by_country(&code);
    Json(CountryCurrencyResponse {
        country: code,
        currency,
    })
    .into_response()
}

/// GET `/countries/currency?name=...` - Currency for a country display name.
async fn currency_by_name(
    State(state): State<AppState>,
    query: Result<Query<CountryNameQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(&rejection),
    };
    let currency = state.currency.currency_by_country_name(&query.name);
    Json(CountryCurrencyResponse {
        country: query.name,
        currency,
    })
    .into_response()
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

    #[rstest]
    #[case("/countries/GB/currency", "GBP")]
    #[case("/countries/JP/currency", "JPY")]
    #[case("/countries/gb/currency", "USD")]
    #[case("/countries/ZZ/currency", "USD")]
    #[tokio::test]
    async fn test_currency_by_code(#[case] uri: &str, #[case] expected: &str) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currency"], expected);
    }

    #[rstest]
    #[case("/countries/currency?name=Germany", "Germany", "EUR")]
    #[case("/countries/currency?name=C%C3%B4te%20d'Ivoire", "Côte d'Ivoire", "XOF")]
    #[case("/countries/currency?name=Narnia", "Narnia", "USD")]
    #[tokio::test]
    async fn test_currency_by_name(#[case] uri: &str, #[case] country: &str, #[case] expected: &str) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], country);
        assert_eq!(body["currency"], expected);
    }

    #[tokio::test]
    async fn test_currency_by_name_without_name() {
        let (status, body) = get_json("/countries/currency").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_list_countries() {
        let (status, body) = get_json("/countries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["countries"].as_array().unwrap().len(), COUNTRIES.len());
    }
}
