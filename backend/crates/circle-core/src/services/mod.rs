pub mod friend_request_engine;
pub mod identity_service;
pub mod query_service;
pub mod rate_limit_policy;
