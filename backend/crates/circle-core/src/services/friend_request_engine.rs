use crate::{
    CallerContext, CoreError, CoreResult, FriendRequest, FriendRequestDecision,
    FriendRequestStore, InsertOutcome, RateLimitPolicy, UserStore,
};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Validates and applies friend-request state changes.
///
/// Checks run in a fixed order so callers always see the same failure for
/// the same input: missing receiver, self request, duplicate pending, rate
/// limit. The duplicate check is repeated atomically by the store on insert.
pub struct FriendRequestEngine<'a, U: UserStore + ?Sized, R: FriendRequestStore + ?Sized> {
    users: &'a U,
    requests: &'a R,
    policy: RateLimitPolicy,
}

impl<'a, U: UserStore + ?Sized, R: FriendRequestStore + ?Sized> FriendRequestEngine<'a, U, R> {
    pub fn new(users: &'a U, requests: &'a R, policy: RateLimitPolicy) -> Self {
        Self {
            users,
            requests,
            policy,
        }
    }

    pub async fn send_request(
        &self,
        ctx: &CallerContext,
        receiver_id: Uuid,
    ) -> CoreResult<FriendRequest> {
        let sender_id = ctx.user_id;

        // 1. Receiver must exist
        let receiver = self
            .users
            .find_by_id(receiver_id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", receiver_id))?;

        // 2. No self requests
        if receiver.id == sender_id {
            return Err(CoreError::SelfRequest {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 3. One pending request per direction
        if self.requests.has_pending(sender_id, receiver.id).await? {
            return Err(CoreError::DuplicatePending {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 4. Sliding window, counts requests of every status
        let since = self.policy.window_start(ctx.requested_at);
        let sent = self.requests.count_sent_since(sender_id, since).await?;
        if self.policy.is_exceeded(sent) {
            return Err(CoreError::RateLimited {
                limit: self.policy.max_requests,
                window_secs: self.policy.window.num_seconds(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 5. Insert; a concurrent send for the same pair loses here
        let request = FriendRequest::new(sender_id, receiver.id, ctx.requested_at);
        match self.requests.insert_pending(&request).await? {
            InsertOutcome::Inserted => Ok(request),
            InsertOutcome::Duplicate => Err(CoreError::DuplicatePending {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Accept or reject a pending request addressed to the caller.
    ///
    /// `decision` is the raw status string; anything other than `accepted`
    /// or `rejected` is an invalid transition. Requests addressed to someone
    /// else are reported as not found.
    pub async fn resolve_request(
        &self,
        ctx: &CallerContext,
        request_id: Uuid,
        decision: &str,
    ) -> CoreResult<FriendRequest> {
        let mut request = self
            .requests
            .find_by_id(request_id)
            .await?
            .filter(|r| r.receiver_id == ctx.user_id)
            .ok_or_else(|| CoreError::not_found("Friend request", request_id))?;

        let decision = FriendRequestDecision::from_str(decision)?;
        request.resolve(decision, ctx.requested_at)?;

        if !self.requests.update_status_if_pending(&request).await? {
            return Err(CoreError::invalid_transition(format!(
                "Friend request {request_id} was resolved concurrently"
            )));
        }

        Ok(request)
    }

    /// A request stays readable by both ends after it is resolved
    pub async fn find_request(
        &self,
        ctx: &CallerContext,
        request_id: Uuid,
    ) -> CoreResult<FriendRequest> {
        self.requests
            .find_by_id(request_id)
            .await?
            .filter(|r| r.involves(ctx.user_id))
            .ok_or_else(|| CoreError::not_found("Friend request", request_id))
    }
}
