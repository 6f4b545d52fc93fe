use circle_core::FriendRequest;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FriendRequestDto {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<FriendRequest> for FriendRequestDto {
    fn from(r: FriendRequest) -> Self {
        Self {
            id: r.id.to_string(),
            sender_id: r.sender_id.to_string(),
            receiver_id: r.receiver_id.to_string(),
            status: r.status().as_str().to_string(),
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}
