use serde::Deserialize;

/// `status` is validated by the engine, so any string is accepted here
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResolveFriendRequestRequest {
    pub status: Option<String>,
}
