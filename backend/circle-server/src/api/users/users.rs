//! User search handler

use crate::{ApiError, ApiResult, AppState, AuthenticatedUser, SearchQuery, SearchResponse};

use circle_core::{ErrorLocation, QueryService};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/v1/search?q=&page=
pub async fn search_users(
    State(state): State<AppState>,
    AuthenticatedUser(ctx): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let page = match query.page.as_deref() {
        None => 1,
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| ApiError::Validation {
            message: format!("page must be a positive integer, got '{}'", raw),
            field: Some("page".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?,
    };

    let queries = QueryService::new(state.users.as_ref(), state.friend_requests.as_ref());
    let results = queries.search_users(query.q.as_deref(), page).await?;

    log::debug!(
        "User {} searched, {} matches on page {}",
        ctx.user_id,
        results.total,
        results.page
    );

    Ok(Json(results.into()))
}
