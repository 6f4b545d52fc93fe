//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use circle_auth::AuthError;
use circle_core::{CallerContext, ErrorLocation};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Caller identity taken from `Authorization: Bearer <access token>`.
///
/// Only access tokens are accepted; refresh tokens are rejected as 401.
pub struct AuthenticatedUser(pub CallerContext);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix(BEARER_PREFIX))
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate_access(token)?;
            let user_id = claims.user_id()?;

            log::debug!("Authenticated request for user {}", user_id);

            Ok(AuthenticatedUser(CallerContext::new(user_id)))
        }
    }
}
