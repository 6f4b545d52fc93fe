use crate::FriendRequestDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResolveFriendRequestResponse {
    pub message: String,
    pub status: &'static str,
    pub data: FriendRequestDto,
}
