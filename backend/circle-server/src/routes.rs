use crate::{
    AppState, get_friend_request, health, list_friends, list_pending_requests, login,
    refresh_token, resolve_friend_request, search_users, send_friend_request, signup,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Public
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/token/refresh", post(refresh_token))
        // Bearer token required
        .route("/search", get(search_users))
        .route("/friend-requests", post(send_friend_request))
        .route(
            "/friend-requests/{id}",
            get(get_friend_request).patch(resolve_friend_request),
        )
        .route("/friends", get(list_friends))
        .route("/pending-requests", get(list_pending_requests));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
