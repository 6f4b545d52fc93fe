use crate::error::{Result as ServerErrorResult, ServerError};

use circle_auth::{Argon2CredentialHasher, JwtIssuer, JwtValidator, LoginThrottle};
use circle_config::Config;
use circle_core::RateLimitPolicy;
use circle_db::{FriendRequestRepository, UserRepository};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: Arc<UserRepository>,
    pub friend_requests: Arc<FriendRequestRepository>,
    pub hasher: Arc<Argon2CredentialHasher>,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub login_throttle: Arc<LoginThrottle>,
    pub rate_limit: RateLimitPolicy,
}

impl AppState {
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or(ServerError::MissingJwtSecret)?
            .as_bytes();

        let access_ttl = i64::try_from(config.auth.access_token_ttl_secs).unwrap_or(i64::MAX);
        let refresh_ttl = i64::try_from(config.auth.refresh_token_ttl_secs).unwrap_or(i64::MAX);

        let window = i64::try_from(config.friend_requests.rate_limit_window_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(RateLimitPolicy::default().window);
        let rate_limit =
            RateLimitPolicy::new(config.friend_requests.rate_limit_max_requests, window);

        let login_throttle = LoginThrottle::new(circle_auth::LoginThrottleConfig {
            max_attempts: config.login_throttle.max_attempts,
            window_secs: config.login_throttle.window_secs,
        });

        let hasher = Argon2CredentialHasher::with_params(
            config.auth.password_hash_memory_kib,
            config.auth.password_hash_time_cost,
            config.auth.password_hash_parallelism,
        )?;

        Ok(Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            friend_requests: Arc::new(FriendRequestRepository::new(pool.clone())),
            hasher: Arc::new(hasher),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(secret, access_ttl, refresh_ttl)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret)),
            login_throttle: Arc::new(login_throttle),
            rate_limit,
            pool,
        })
    }
}
