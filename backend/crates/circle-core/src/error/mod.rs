use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: String,
        location: ErrorLocation,
    },

    #[error("Email already in use {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Cannot send friend request to yourself {location}")]
    SelfRequest { location: ErrorLocation },

    #[error("Friend request already sent {location}")]
    DuplicatePending { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} friend requests per {window_secs}s {location}")]
    RateLimited {
        limit: u32,
        window_secs: i64,
        location: ErrorLocation,
    },

    #[error("Invalid transition: {message} {location}")]
    InvalidTransition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid friend request status: {value} {location}")]
    InvalidFriendRequestStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        CoreError::MissingField {
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: ToString>(entity: &'static str, id: S) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidTransition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap an adapter failure; the message is for logs, not for clients
    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
