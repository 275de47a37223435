//! JSON error responses.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use dropship_shared::AppError;
use serde_json::json;

/// Renders an `AppError` as `{ "error": CODE, "message": ... }`.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Renders an extractor rejection (bad query string, path or JSON body) as a
/// validation error.
pub fn rejection_response(rejection: &impl std::fmt::Display) -> Response {
    error_response(&AppError::Validation(rejection.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        let response = error_response(&AppError::Validation("bad amount".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&AppError::Internal("broken".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_rejection_response_is_validation_error() {
        let response = rejection_response(&"missing field `amount`");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
