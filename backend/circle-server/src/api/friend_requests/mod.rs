pub mod friend_request_dto;
pub mod friend_requests;
pub mod resolve_friend_request_request;
pub mod resolve_friend_request_response;
pub mod send_friend_request_request;
