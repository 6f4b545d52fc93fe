use crate::{CoreError, CoreResult, FriendRequestStatus};

use std::str::FromStr;

/// The two answers a receiver can give to a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendRequestDecision {
    Accepted,
    Rejected,
}

impl FriendRequestDecision {
    pub fn as_str(&self) -> &'static str {
        self.status().as_str()
    }

    pub fn status(&self) -> FriendRequestStatus {
        match self {
            Self::Accepted => FriendRequestStatus::Accepted,
            Self::Rejected => FriendRequestStatus::Rejected,
        }
    }
}

impl FromStr for FriendRequestDecision {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::invalid_transition(format!(
                "Invalid status '{s}': expected 'accepted' or 'rejected'"
            ))),
        }
    }
}
