//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a status code matching its kind.

use circle_auth::AuthError;
use circle_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "MISSING_FIELD")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if the error concerns a specific request field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required request field absent or blank (400)
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: String,
        location: ErrorLocation,
    },

    /// Signup with a registered email (400)
    #[error("Email already in use {location}")]
    DuplicateEmail { location: ErrorLocation },

    /// Login failure, deliberately vague (400)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Friend request addressed to the sender (400)
    #[error("Self request {location}")]
    SelfRequest { location: ErrorLocation },

    /// Pending request for the same direction exists (400)
    #[error("Duplicate pending request {location}")]
    DuplicatePending { location: ErrorLocation },

    /// Request on a resolved friend request, or an unknown decision (400)
    #[error("Invalid transition: {message} {location}")]
    InvalidTransition {
        message: String,
        location: ErrorLocation,
    },

    /// Too many attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, malformed or expired token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500); the message is logged, never returned
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingField { .. } => "MISSING_FIELD",
            ApiError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            ApiError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::SelfRequest { .. } => "SELF_REQUEST",
            ApiError::DuplicatePending { .. } => "DUPLICATE_PENDING",
            ApiError::InvalidTransition { .. } => "INVALID_TRANSITION",
            ApiError::RateLimited { .. } => "RATE_LIMITED",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        ApiError::MissingField {
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn into_body(self) -> ApiErrorBody {
        let code = self.code().to_string();

        let (message, field) = match self {
            ApiError::MissingField { field, .. } => {
                (format!("Missing required field: {}", field), Some(field))
            }
            ApiError::DuplicateEmail { .. } => ("Email already in use".to_string(), None),
            ApiError::InvalidCredentials { .. } => ("Invalid credentials".to_string(), None),
            ApiError::SelfRequest { .. } => (
                "Cannot send friend request to yourself".to_string(),
                None,
            ),
            ApiError::DuplicatePending { .. } => ("Friend request already sent".to_string(), None),
            ApiError::NotFound { message, .. }
            | ApiError::InvalidTransition { message, .. }
            | ApiError::RateLimited { message, .. }
            | ApiError::Unauthorized { message, .. } => (message, None),
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::Internal { .. } => (INTERNAL_ERROR_MESSAGE.to_string(), None),
        };

        ApiErrorBody {
            code,
            message,
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        (status, Json(ApiErrorResponse { error: self.into_body() })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::MissingField { field, .. } => ApiError::MissingField { field, location },
            CoreError::DuplicateEmail { .. } => ApiError::DuplicateEmail { location },
            CoreError::InvalidCredentials { .. } => ApiError::InvalidCredentials { location },
            CoreError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: if entity == "Page" {
                    "Invalid page".to_string()
                } else {
                    format!("{} {} not found", entity, id)
                },
                location,
            },
            CoreError::SelfRequest { .. } => ApiError::SelfRequest { location },
            CoreError::DuplicatePending { .. } => ApiError::DuplicatePending { location },
            CoreError::RateLimited {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Cannot send more than {} friend requests within {} seconds",
                    limit, window_secs
                ),
                location,
            },
            CoreError::InvalidTransition { message, .. } => {
                ApiError::InvalidTransition { message, location }
            }
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            // Don't expose store details to clients
            e @ (CoreError::Store { .. } | CoreError::InvalidFriendRequestStatus { .. }) => {
                ApiError::Internal {
                    message: e.to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many login attempts: {} allowed per {} seconds",
                    limit, window_secs
                ),
                location,
            },
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                message: "Token expired".to_string(),
                location,
            },
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: "Missing authorization header".to_string(),
                location,
            },
            AuthError::InvalidScheme { .. } => ApiError::Unauthorized {
                message: "Expected a Bearer token".to_string(),
                location,
            },
            e if !e.is_client_error() => ApiError::Internal {
                message: e.to_string(),
                location,
            },
            e => {
                log::debug!("Rejected credentials ({}): {}", e.error_code(), e);
                ApiError::Unauthorized {
                    message: "Invalid token".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
