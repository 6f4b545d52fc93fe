use crate::TokenType;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    // Authorization header
    #[error("No Authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Authorization header is not 'Bearer <token>' {location}")]
    InvalidScheme { location: ErrorLocation },

    // Presented token
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token rejected: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Expected a {expected} token, got a {actual} token {location}")]
    WrongTokenType {
        expected: TokenType,
        actual: TokenType,
        location: ErrorLocation,
    },

    #[error("Claim '{claim}' is invalid: {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    // Login attempts
    #[error("{limit} login attempts per {window_secs}s exceeded {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    // Configuration
    #[error("Invalid password hashing parameters: {message} {location}")]
    HashParams {
        message: String,
        location: ErrorLocation,
    },

    // Issuing
    #[error("Failed to sign token: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "TOKEN_REJECTED",
            Self::WrongTokenType { .. } => "WRONG_TOKEN_TYPE",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
            Self::HashParams { .. } => "INVALID_HASH_PARAMS",
            Self::JwtEncode { .. } => "TOKEN_SIGNING_FAILED",
        }
    }

    /// Failures caused by what the caller presented, as opposed to our own
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::JwtEncode { .. } | Self::HashParams { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
