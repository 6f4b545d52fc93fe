pub mod search_query;
pub mod search_response;
pub mod user_dto;
pub mod users;
