//! Friend request REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, FriendRequestDto,
    ResolveFriendRequestRequest, ResolveFriendRequestResponse, SendFriendRequestRequest,
};

use circle_core::{FriendRequestEngine, QueryService};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/friend-requests
pub async fn send_friend_request(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
    Json(req): Json<SendFriendRequestRequest>,
) -> ApiResult<(StatusCode, Json<FriendRequestDto>)> {
    // No receiver to resolve is the same failure as an unknown one
    let receiver_id = req
        .receiver_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    let receiver_id = Uuid::parse_str(receiver_id)?;

    let engine = FriendRequestEngine::new(
        state.users.as_ref(),
        state.friend_requests.as_ref(),
        state.rate_limit,
    );
    let request = engine.send_request(&ctx, receiver_id).await?;

    log::info!(
        "Friend request {} sent from {} to {}",
        request.id,
        request.sender_id,
        request.receiver_id
    );

    Ok((StatusCode::CREATED, Json(request.into())))
}

/// PATCH /api/v1/friend-requests/{id}
pub async fn resolve_friend_request(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
    Path(request_id): Path<String>,
    Json(req): Json<ResolveFriendRequestRequest>,
) -> ApiResult<Json<ResolveFriendRequestResponse>> {
    let request_uuid = Uuid::parse_str(&request_id)?;
    let decision = req.status.unwrap_or_default();

    let engine = FriendRequestEngine::new(
        state.users.as_ref(),
        state.friend_requests.as_ref(),
        state.rate_limit,
    );
    let request = engine.resolve_request(&ctx, request_uuid, &decision).await?;
    let status = request.status();

    log::info!("Friend request {} {} by {}", request.id, status, ctx.user_id);

    Ok(Json(ResolveFriendRequestResponse {
        message: format!("Friend request {} successfully", status),
        status: "success",
        data: request.into(),
    }))
}

/// GET /api/v1/friend-requests/{id}
pub async fn get_friend_request(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
    Path(request_id): Path<String>,
) -> ApiResult<Json<FriendRequestDto>> {
    let request_uuid = Uuid::parse_str(&request_id)?;

    let engine = FriendRequestEngine::new(
        state.users.as_ref(),
        state.friend_requests.as_ref(),
        state.rate_limit,
    );
    let request = engine.find_request(&ctx, request_uuid).await?;

    Ok(Json(request.into()))
}

/// GET /api/v1/pending-requests
pub async fn list_pending_requests(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
) -> ApiResult<Json<Vec<FriendRequestDto>>> {
    let queries = QueryService::new(state.users.as_ref(), state.friend_requests.as_ref());
    let pending = queries.list_pending_received(&ctx).await?;

    Ok(Json(pending.into_iter().map(FriendRequestDto::from).collect()))
}
