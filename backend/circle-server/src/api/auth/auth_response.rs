use crate::UserDto;

use circle_auth::TokenPair;
use circle_core::User;

use serde::Serialize;

/// Returned by signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub refresh: String,
    pub access: String,
    pub user: UserDto,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: User) -> Self {
        Self {
            refresh: tokens.refresh,
            access: tokens.access,
            user: user.into(),
        }
    }
}
