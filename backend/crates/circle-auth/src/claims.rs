use crate::{AuthError, Result as AuthErrorResult, TokenType};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for both access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    pub token_type: TokenType,
    /// Unique token id
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: Uuid, token_type: TokenType, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_secs,
            token_type,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Shape checks that run after the signature has been verified
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.jti.trim().is_empty() {
            return Err(invalid_claim("jti", "missing token id"));
        }

        if self.exp <= self.iat {
            return Err(invalid_claim(
                "exp",
                format!("expires at {} but was issued at {}", self.exp, self.iat),
            ));
        }

        self.user_id().map(|_| ())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub)
            .map_err(|e| invalid_claim("sub", format!("'{}' is not a user id: {}", self.sub, e)))
    }
}

#[track_caller]
fn invalid_claim(claim: &str, message: impl Into<String>) -> AuthError {
    AuthError::InvalidClaim {
        claim: claim.to_string(),
        message: message.into(),
        location: ErrorLocation::from(Location::caller()),
    }
}
