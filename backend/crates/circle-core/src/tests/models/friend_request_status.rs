use crate::{CoreError, FriendRequestDecision, FriendRequestStatus};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_friend_request_status_as_str() {
    assert_eq!(FriendRequestStatus::Pending.as_str(), "pending");
    assert_eq!(FriendRequestStatus::Accepted.as_str(), "accepted");
    assert_eq!(FriendRequestStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_friend_request_status_from_str() {
    assert_eq!(
        FriendRequestStatus::from_str("pending").unwrap(),
        FriendRequestStatus::Pending
    );
    assert_eq!(
        FriendRequestStatus::from_str("accepted").unwrap(),
        FriendRequestStatus::Accepted
    );
    assert_eq!(
        FriendRequestStatus::from_str("rejected").unwrap(),
        FriendRequestStatus::Rejected
    );
    assert!(matches!(
        FriendRequestStatus::from_str("Accepted"),
        Err(CoreError::InvalidFriendRequestStatus { .. })
    ));
}

#[test]
fn test_only_pending_is_not_terminal() {
    assert!(!FriendRequestStatus::Pending.is_terminal());
    assert!(FriendRequestStatus::Accepted.is_terminal());
    assert!(FriendRequestStatus::Rejected.is_terminal());
}

#[test]
fn given_pending_when_parsed_as_decision_then_invalid_transition() {
    let result = FriendRequestDecision::from_str("pending");

    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
}

#[test]
fn test_decision_maps_to_terminal_status() {
    assert_eq!(
        FriendRequestDecision::Accepted.status(),
        FriendRequestStatus::Accepted
    );
    assert_eq!(
        FriendRequestDecision::Rejected.status(),
        FriendRequestStatus::Rejected
    );
    assert_eq!(FriendRequestDecision::Rejected.as_str(), "rejected");
}

proptest! {
    #[test]
    fn given_random_word_when_parsed_as_decision_then_fails(value in "[a-z]{1,12}") {
        if value != "accepted" && value != "rejected" {
            prop_assert!(FriendRequestDecision::from_str(&value).is_err());
        }
    }
}
