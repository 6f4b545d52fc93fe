use crate::{CoreResult, FriendRequest, InsertOutcome, User};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait FriendRequestStore: Send + Sync {
    /// Returns `Duplicate` when a pending request for the same ordered
    /// (sender, receiver) pair already exists
    async fn insert_pending(&self, request: &FriendRequest) -> CoreResult<InsertOutcome>;

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<FriendRequest>>;

    async fn has_pending(&self, sender_id: Uuid, receiver_id: Uuid) -> CoreResult<bool>;

    /// Requests of any status created by `sender_id` at or after `since`
    async fn count_sent_since(&self, sender_id: Uuid, since: DateTime<Utc>) -> CoreResult<u32>;

    /// Persist `request`'s status only if the stored row is still pending.
    /// Returns false when nothing was written.
    async fn update_status_if_pending(&self, request: &FriendRequest) -> CoreResult<bool>;

    /// Users linked to `user_id` by an accepted request in either direction
    async fn find_friends(&self, user_id: Uuid) -> CoreResult<Vec<User>>;

    /// Pending requests addressed to `user_id`, oldest first
    async fn find_pending_received(&self, user_id: Uuid) -> CoreResult<Vec<FriendRequest>>;
}
