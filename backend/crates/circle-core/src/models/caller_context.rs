use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Authenticated caller identity, passed explicitly into every operation
/// that acts on behalf of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    pub user_id: Uuid,
    pub requested_at: DateTime<Utc>,
}

impl CallerContext {
    pub fn new(user_id: Uuid) -> Self {
        Self::at(user_id, Utc::now())
    }

    pub fn at(user_id: Uuid, requested_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            requested_at,
        }
    }
}
