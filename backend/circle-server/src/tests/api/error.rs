use crate::ApiError;

use circle_auth::{AuthError, TokenType};
use circle_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 42 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 42 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_not_found_helper_returns_404_without_field() {
    let (status, json) = body_json(ApiError::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_missing_field_returns_400_with_field() {
    let (status, json) = body_json(ApiError::missing_field("refresh")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_FIELD");
    assert_eq!(json["error"]["field"], "refresh");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Token expired")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[test]
fn test_core_rate_limit_maps_to_429_with_limits_in_message() {
    let error: ApiError = CoreError::RateLimited {
        limit: 3,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(error.code(), "RATE_LIMITED");
    match error {
        ApiError::RateLimited { message, .. } => {
            assert!(message.contains('3'));
            assert!(message.contains("60"));
        }
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[test]
fn test_core_page_not_found_maps_to_invalid_page() {
    let error: ApiError = CoreError::not_found("Page", 7).into();

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Invalid page"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_core_error_codes() {
    let cases: Vec<(CoreError, &str)> = vec![
        (CoreError::missing_field("email"), "MISSING_FIELD"),
        (
            CoreError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            },
            "DUPLICATE_EMAIL",
        ),
        (
            CoreError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            "INVALID_CREDENTIALS",
        ),
        (
            CoreError::SelfRequest {
                location: ErrorLocation::from(Location::caller()),
            },
            "SELF_REQUEST",
        ),
        (
            CoreError::DuplicatePending {
                location: ErrorLocation::from(Location::caller()),
            },
            "DUPLICATE_PENDING",
        ),
        (
            CoreError::invalid_transition("already accepted"),
            "INVALID_TRANSITION",
        ),
        (CoreError::store("disk full"), "INTERNAL_ERROR"),
    ];

    for (core, expected) in cases {
        let error: ApiError = core.into();
        assert_eq!(error.code(), expected);
    }
}

#[test]
fn test_auth_errors_map_to_401_or_429() {
    let expired: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);

    let wrong_type: ApiError = AuthError::WrongTokenType {
        expected: TokenType::Access,
        actual: TokenType::Refresh,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    assert_eq!(wrong_type.status(), StatusCode::UNAUTHORIZED);

    let throttled: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    assert_eq!(throttled.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn test_uuid_error_maps_to_validation() {
    let error: ApiError = Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.code(), "VALIDATION_ERROR");
}
