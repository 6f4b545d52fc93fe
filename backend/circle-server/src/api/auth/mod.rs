pub mod access_token_response;
pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod refresh_request;
pub mod signup_request;
