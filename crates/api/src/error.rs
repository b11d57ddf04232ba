//! JSON error responses for non-form endpoints.
//!
//! The form endpoint answers every outcome with HTTP 200 and an inline
//! message; everything else maps `AppError` to a status code and a JSON
//! body here.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cambio_shared::AppError;

/// Renders an `AppError` as a JSON error response.
pub fn error_response(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}

/// Fallback handler for paths outside the route table.
pub async fn not_found(uri: Uri) -> Response {
    error_response(&AppError::NotFound(uri.path().to_string()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use cambio_shared::AppError;

    use crate::{create_router, test_support};

    #[tokio::test]
    async fn test_unknown_route_json_404() {
        let app = create_router(test_support::test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/definitely/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "Not found: /definitely/missing");
    }

    #[tokio::test]
    async fn test_error_response_status_mapping() {
        let response = super::error_response(&AppError::Internal("boom".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = super::error_response(&AppError::Validation("bad field".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
