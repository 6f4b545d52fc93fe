use crate::AuthenticatedUser;
use crate::tests::create_test_state;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

async fn extract(
    state: &crate::AppState,
    authorization: Option<String>,
) -> Result<AuthenticatedUser, crate::ApiError> {
    let mut builder = Request::builder().uri("/api/v1/friends");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();

    AuthenticatedUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_valid_access_token_yields_caller() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let tokens = state.jwt_issuer.issue_pair(user_id).unwrap();

    let AuthenticatedUser(ctx) = extract(&state, Some(format!("Bearer {}", tokens.access)))
        .await
        .unwrap();

    assert_eq!(ctx.user_id, user_id);
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let state = create_test_state().await;

    let error = extract(&state, None).await.err().unwrap();

    assert_eq!(error.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let state = create_test_state().await;

    let error = extract(&state, Some("Basic dXNlcjpwYXNz".to_string()))
        .await
        .err()
        .unwrap();

    assert_eq!(error.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_rejected() {
    let state = create_test_state().await;
    let tokens = state.jwt_issuer.issue_pair(Uuid::new_v4()).unwrap();

    let error = extract(&state, Some(format!("Bearer {}", tokens.refresh)))
        .await
        .err()
        .unwrap();

    assert_eq!(error.status(), http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let state = create_test_state().await;

    let error = extract(&state, Some("Bearer not.a.jwt".to_string()))
        .await
        .err()
        .unwrap();

    assert_eq!(error.status(), http::StatusCode::UNAUTHORIZED);
}
