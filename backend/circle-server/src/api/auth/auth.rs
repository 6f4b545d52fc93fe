//! Signup, login and token refresh handlers

use crate::{
    AccessTokenResponse, ApiError, ApiResult, AppState, AuthResponse, LoginRequest,
    RefreshRequest, SignupRequest,
};

use circle_core::{CoreError, IdentityService};

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/v1/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let identity = IdentityService::new(state.users.as_ref(), state.hasher.as_ref());

    let user = identity.create_user(req.into()).await?;
    let tokens = state.jwt_issuer.issue_pair(user.id)?;

    log::info!("Created user {} via REST API", user.id);

    Ok((StatusCode::CREATED, Json(AuthResponse::new(tokens, user))))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    state.login_throttle.check(&req.email)?;

    let identity = IdentityService::new(state.users.as_ref(), state.hasher.as_ref());

    let user = match identity.authenticate(&req.email, &req.password).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Failed login attempt");
            return Err(e.into());
        }
    };
    let tokens = state.jwt_issuer.issue_pair(user.id)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(AuthResponse::new(tokens, user)))
}

/// POST /api/v1/token/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> ApiResult<Json<AccessTokenResponse>> {
    if req.refresh.trim().is_empty() {
        return Err(ApiError::missing_field("refresh"));
    }

    let claims = state.jwt_validator.validate_refresh(req.refresh.trim())?;
    let user_id = claims.user_id()?;

    let identity = IdentityService::new(state.users.as_ref(), state.hasher.as_ref());
    match identity.find_by_id(user_id).await {
        Ok(_) => {}
        Err(CoreError::NotFound { .. }) => return Err(ApiError::unauthorized("Unknown user")),
        Err(e) => return Err(e.into()),
    }

    let access = state.jwt_issuer.issue_access(user_id)?;

    Ok(Json(AccessTokenResponse { access }))
}
