use crate::{ConfigError, ConfigErrorResult, ConfigSection};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 300;
pub const MIN_ACCESS_TOKEN_TTL_SECS: u64 = 30;
pub const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 86_400;

pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 86_400;
pub const MAX_REFRESH_TOKEN_TTL_SECS: u64 = 30 * 86_400;

// Argon2id cost, defaults match the argon2 crate (19 MiB, 2 passes, 1 lane)
pub const DEFAULT_PASSWORD_HASH_MEMORY_KIB: u32 = 19_456;
pub const MIN_PASSWORD_HASH_MEMORY_KIB: u32 = 8_192;
pub const DEFAULT_PASSWORD_HASH_TIME_COST: u32 = 2;
pub const DEFAULT_PASSWORD_HASH_PARALLELISM: u32 = 1;
pub const MAX_PASSWORD_HASH_PARALLELISM: u32 = 16;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required.
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    /// Argon2id memory cost in KiB
    pub password_hash_memory_kib: u32,
    /// Argon2id passes over memory
    pub password_hash_time_cost: u32,
    /// Argon2id lanes
    pub password_hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            password_hash_memory_kib: DEFAULT_PASSWORD_HASH_MEMORY_KIB,
            password_hash_time_cost: DEFAULT_PASSWORD_HASH_TIME_COST,
            password_hash_parallelism: DEFAULT_PASSWORD_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::invalid(
                    ConfigSection::Auth,
                    "auth.jwt_secret is required (set CIRCLE_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::invalid(
                    ConfigSection::Auth,
                    format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    ),
                ));
            }
            Some(_) => {}
        }

        if self.access_token_ttl_secs < MIN_ACCESS_TOKEN_TTL_SECS
            || self.access_token_ttl_secs > MAX_ACCESS_TOKEN_TTL_SECS
        {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                format!(
                    "auth.access_token_ttl_secs must be {}-{}, got {}",
                    MIN_ACCESS_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
                ),
            ));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                format!(
                    "auth.refresh_token_ttl_secs must exceed the access token lifetime and be at most {}, got {}",
                    MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
                ),
            ));
        }

        if self.password_hash_memory_kib < MIN_PASSWORD_HASH_MEMORY_KIB {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                format!(
                    "auth.password_hash_memory_kib must be at least {}, got {}",
                    MIN_PASSWORD_HASH_MEMORY_KIB, self.password_hash_memory_kib
                ),
            ));
        }

        if self.password_hash_time_cost == 0 {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                "auth.password_hash_time_cost must be at least 1",
            ));
        }

        if self.password_hash_parallelism == 0
            || self.password_hash_parallelism > MAX_PASSWORD_HASH_PARALLELISM
        {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                format!(
                    "auth.password_hash_parallelism must be 1-{}, got {}",
                    MAX_PASSWORD_HASH_PARALLELISM, self.password_hash_parallelism
                ),
            ));
        }

        Ok(())
    }
}
