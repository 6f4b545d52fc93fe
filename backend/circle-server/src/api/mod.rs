pub mod auth;
pub mod error;
pub mod extractors;
pub mod friend_requests;
pub mod friends;
pub mod users;
