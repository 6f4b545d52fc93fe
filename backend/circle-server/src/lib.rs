pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        access_token_response::AccessTokenResponse,
        auth::{login, refresh_token, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        refresh_request::RefreshRequest,
        signup_request::SignupRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    friend_requests::{
        friend_request_dto::FriendRequestDto,
        friend_requests::{
            get_friend_request, list_pending_requests, resolve_friend_request,
            send_friend_request,
        },
        resolve_friend_request_request::ResolveFriendRequestRequest,
        resolve_friend_request_response::ResolveFriendRequestResponse,
        send_friend_request_request::SendFriendRequestRequest,
    },
    friends::friends::list_friends,
    users::{
        search_query::SearchQuery, search_response::SearchResponse, user_dto::UserDto,
        users::search_users,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
