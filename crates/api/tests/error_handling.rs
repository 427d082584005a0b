//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::response::IntoResponse;
use dogs_api::error::AppError;
use dogs_core::error::{CoreError, StoreError};
use dogs_core::validation::FieldErrors;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Dog",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Dog with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400_with_field_map() {
    let mut fields = FieldErrors::new();
    fields.add("name", "must not be blank");
    fields.add("weight", "must be greater than 0");
    let err = AppError::Core(CoreError::Validation(fields));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"]["name"], "must not be blank");
    assert_eq!(json["errors"]["weight"], "must be greater than 0");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid body");
}

#[tokio::test]
async fn unsupported_media_type_error_returns_415() {
    let err = AppError::UnsupportedMediaType(
        "Expected request with `Content-Type: application/json`".into(),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let cause = std::io::Error::other("password authentication failed for user dogs");
    let err = AppError::Core(CoreError::Store(StoreError::backend(cause)));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("password"));
}
