//! Friend list handler

use crate::{ApiResult, AppState, AuthenticatedUser, UserDto};

use circle_core::QueryService;

use axum::{Json, extract::State};

/// GET /api/v1/friends
pub async fn list_friends(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
) -> ApiResult<Json<Vec<UserDto>>> {
    let queries = QueryService::new(state.users.as_ref(), state.friend_requests.as_ref());
    let friends = queries.list_friends(&ctx).await?;

    Ok(Json(friends.into_iter().map(UserDto::from).collect()))
}
