pub mod caller_context;
pub mod friend_request;
pub mod friend_request_decision;
pub mod friend_request_status;
pub mod page;
pub mod user;
