pub mod error;
pub mod models;
pub mod ports;
pub mod services;


pub use error::{CoreError, Result as CoreResult};
pub use models::caller_context::CallerContext;
pub use models::friend_request::FriendRequest;
pub use models::friend_request_decision::FriendRequestDecision;
pub use models::friend_request_status::FriendRequestStatus;
pub use models::page::{Page, PageRequest, SEARCH_PAGE_SIZE};
pub use models::user::{User, normalize_email};
pub use ports::credential_hasher::CredentialHasher;
pub use ports::friend_request_store::FriendRequestStore;
pub use ports::insert_outcome::InsertOutcome;
pub use ports::user_store::UserStore;
pub use services::friend_request_engine::FriendRequestEngine;
pub use services::identity_service::{IdentityService, SignupInput};
pub use services::query_service::QueryService;
pub use services::rate_limit_policy::RateLimitPolicy;

pub use error_location::ErrorLocation;
