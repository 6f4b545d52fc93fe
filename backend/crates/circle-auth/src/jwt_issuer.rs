use crate::{AuthError, Claims, Result as AuthErrorResult, TokenPair, TokenType};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 300;
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 86_400;

/// Signs access/refresh token pairs with a shared HS256 secret
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    #[track_caller]
    pub fn issue_pair(&self, user_id: Uuid) -> AuthErrorResult<TokenPair> {
        Ok(TokenPair {
            access: self.issue(user_id, TokenType::Access)?,
            refresh: self.issue(user_id, TokenType::Refresh)?,
        })
    }

    #[track_caller]
    pub fn issue_access(&self, user_id: Uuid) -> AuthErrorResult<String> {
        self.issue(user_id, TokenType::Access)
    }

    #[track_caller]
    fn issue(&self, user_id: Uuid, token_type: TokenType) -> AuthErrorResult<String> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl_secs,
            TokenType::Refresh => self.refresh_ttl_secs,
        };
        let claims = Claims::new(user_id, token_type, Utc::now().timestamp(), ttl);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
