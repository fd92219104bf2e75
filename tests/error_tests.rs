// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use workout_tracker::error::AppError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (AppError::Unauthenticated, StatusCode::UNAUTHORIZED),
        (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (AppError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
        (AppError::DuplicateEmail, StatusCode::BAD_REQUEST),
        (AppError::Forbidden, StatusCode::FORBIDDEN),
        (AppError::NotFound("gone".to_string()), StatusCode::NOT_FOUND),
        (
            AppError::Database("boom".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.status(), expected);
        let (status, body) = render(err).await;
        assert_eq!(status, expected);
        assert!(body["error"].is_string());
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_internal_details_not_leaked() {
    let (status, body) = render(AppError::Database(
        "connection refused to 10.0.0.5:8080".to_string(),
    ))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
    assert!(!body.to_string().contains("10.0.0.5"));

    let (status, body) =
        render(AppError::Internal(anyhow::anyhow!("secret stack detail"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("secret stack detail"));
}

#[tokio::test]
async fn test_validation_message_returned() {
    let (_, body) = render(AppError::Validation("Name is required".to_string())).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Name is required");
}
