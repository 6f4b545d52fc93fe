use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SendFriendRequestRequest {
    pub receiver_id: Option<String>,
}
