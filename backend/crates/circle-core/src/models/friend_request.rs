use crate::{CoreError, CoreResult, FriendRequestDecision, FriendRequestStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directional request from `sender_id` to `receiver_id`.
///
/// `status` is private: the only way to move a request out of `Pending` is
/// [`FriendRequest::resolve`], which refuses to touch a terminal request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendRequest {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,

    status: FriendRequestStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FriendRequest {
    pub fn new(sender_id: Uuid, receiver_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            status: FriendRequestStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }

    /// Rebuild a request read back from a store
    pub fn restore(
        id: Uuid,
        sender_id: Uuid,
        receiver_id: Uuid,
        status: FriendRequestStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn status(&self) -> FriendRequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == FriendRequestStatus::Pending
    }

    /// True when `user_id` is either end of the request
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    #[track_caller]
    pub fn resolve(&mut self, decision: FriendRequestDecision, at: DateTime<Utc>) -> CoreResult<()> {
        if self.status.is_terminal() {
            return Err(CoreError::invalid_transition(format!(
                "Friend request {} is already {}",
                self.id, self.status
            )));
        }

        self.status = decision.status();
        self.updated_at = at;

        Ok(())
    }
}
