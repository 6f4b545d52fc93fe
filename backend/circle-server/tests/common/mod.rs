#![allow(dead_code)]

//! Test infrastructure for circle-server API tests

use circle_config::Config;
use circle_db::Database;
use circle_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-32-chars-min";
pub const TEST_PASSWORD: &str = "s3cret-password";

/// Create AppState for testing on a private in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(|_| {}).await
}

/// Same as [`create_test_app_state`] with config tweaks applied first
pub async fn create_test_app_state_with(tweak: impl FnOnce(&mut Config)) -> AppState {
    let pool = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    // Keep hashing cheap
    config.auth.password_hash_memory_kib = 8;
    config.auth.password_hash_time_cost = 1;
    config.auth.password_hash_parallelism = 1;
    tweak(&mut config);

    AppState::from_config(pool, &config).expect("Failed to build app state")
}

/// Send one request through a fresh router
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app: Router = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };

    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// A signed-up user with its tokens
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub access: String,
    pub refresh: String,
}

pub async fn signup_user(state: &AppState, first_name: &str, last_name: &str) -> TestUser {
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    let (status, json) = send(
        state,
        json_request(
            "POST",
            "/api/v1/signup",
            json!({
                "email": email,
                "username": first_name.to_lowercase(),
                "password": TEST_PASSWORD,
                "first_name": first_name,
                "last_name": last_name,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {json}");

    TestUser {
        id: json["user"]["id"].as_str().unwrap().to_string(),
        email,
        access: json["access"].as_str().unwrap().to_string(),
        refresh: json["refresh"].as_str().unwrap().to_string(),
    }
}

/// Send a friend request, returning the new request id
pub async fn send_friend_request(state: &AppState, from: &TestUser, to: &TestUser) -> String {
    let (status, json) = send(
        state,
        authed_json_request(
            "POST",
            "/api/v1/friend-requests",
            &from.access,
            json!({ "receiver_id": to.id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "send failed: {json}");

    json["id"].as_str().unwrap().to_string()
}
