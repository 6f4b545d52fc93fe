use crate::tests::MemoryStore;
use crate::{
    CallerContext, CoreError, FriendRequestEngine, QueryService, RateLimitPolicy, User,
};

use googletest::prelude::*;
use uuid::Uuid;

fn ids(users: &[User]) -> Vec<Uuid> {
    users.iter().map(|u| u.id).collect()
}

fn unlimited() -> RateLimitPolicy {
    RateLimitPolicy::new(u32::MAX, chrono::Duration::seconds(60))
}

// =========================================================================
// Friends
// =========================================================================

#[tokio::test]
async fn given_accepted_request_when_listing_friends_then_symmetric() {
    let store = MemoryStore::new();
    let alice = store.add_user("Alice", "Liddell", "alice@x.com");
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    let engine = FriendRequestEngine::new(&store, &store, unlimited());
    let request = engine
        .send_request(&CallerContext::new(alice.id), bob.id)
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(bob.id), request.id, "accepted")
        .await
        .unwrap();
    let query = QueryService::new(&store, &store);

    let alice_friends = query
        .list_friends(&CallerContext::new(alice.id))
        .await
        .unwrap();
    let bob_friends = query.list_friends(&CallerContext::new(bob.id)).await.unwrap();

    assert_eq!(ids(&alice_friends), vec![bob.id]);
    assert_eq!(ids(&bob_friends), vec![alice.id]);
}

#[tokio::test]
async fn given_accepted_requests_in_both_directions_when_listing_friends_then_deduplicated() {
    let store = MemoryStore::new();
    let alice = store.add_user("Alice", "Liddell", "alice@x.com");
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    let engine = FriendRequestEngine::new(&store, &store, unlimited());
    let forward = engine
        .send_request(&CallerContext::new(alice.id), bob.id)
        .await
        .unwrap();
    let backward = engine
        .send_request(&CallerContext::new(bob.id), alice.id)
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(bob.id), forward.id, "accepted")
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(alice.id), backward.id, "accepted")
        .await
        .unwrap();

    let friends = QueryService::new(&store, &store)
        .list_friends(&CallerContext::new(alice.id))
        .await
        .unwrap();

    assert_eq!(ids(&friends), vec![bob.id]);
}

#[tokio::test]
async fn given_pending_or_rejected_requests_when_listing_friends_then_empty() {
    let store = MemoryStore::new();
    let alice = store.add_user("Alice", "Liddell", "alice@x.com");
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    let carol = store.add_user("Carol", "Doe", "carol@x.com");
    let engine = FriendRequestEngine::new(&store, &store, unlimited());
    engine
        .send_request(&CallerContext::new(alice.id), bob.id)
        .await
        .unwrap();
    let rejected = engine
        .send_request(&CallerContext::new(alice.id), carol.id)
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(carol.id), rejected.id, "rejected")
        .await
        .unwrap();

    let friends = QueryService::new(&store, &store)
        .list_friends(&CallerContext::new(alice.id))
        .await
        .unwrap();

    assert!(friends.is_empty());
}

// =========================================================================
// Pending requests
// =========================================================================

#[tokio::test]
async fn given_mixed_requests_when_listing_pending_then_only_received_pending() {
    let store = MemoryStore::new();
    let alice = store.add_user("Alice", "Liddell", "alice@x.com");
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    let carol = store.add_user("Carol", "Doe", "carol@x.com");
    let dave = store.add_user("Dave", "Doe", "dave@x.com");
    let engine = FriendRequestEngine::new(&store, &store, unlimited());

    let from_alice = engine
        .send_request(&CallerContext::new(alice.id), bob.id)
        .await
        .unwrap();
    let from_carol = engine
        .send_request(&CallerContext::new(carol.id), bob.id)
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(bob.id), from_carol.id, "accepted")
        .await
        .unwrap();
    let from_dave = engine
        .send_request(&CallerContext::new(dave.id), bob.id)
        .await
        .unwrap();
    engine
        .resolve_request(&CallerContext::new(bob.id), from_dave.id, "rejected")
        .await
        .unwrap();
    // Bob as sender must not show up in his own pending list
    engine
        .send_request(&CallerContext::new(bob.id), alice.id)
        .await
        .unwrap();

    let pending = QueryService::new(&store, &store)
        .list_pending_received(&CallerContext::new(bob.id))
        .await
        .unwrap();

    let pending_ids: Vec<Uuid> = pending.iter().map(|r| r.id).collect();
    assert_eq!(pending_ids, vec![from_alice.id]);
}

// =========================================================================
// Search
// =========================================================================

#[tokio::test]
async fn given_keyword_with_at_sign_when_searching_then_exact_email_match_only() {
    let store = MemoryStore::new();
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    store.add_user("Bobby", "Stone", "bobby@x.com");
    store.add_user("Robert", "Bob@x.com", "robert@x.com");

    let page = QueryService::new(&store, &store)
        .search_users(Some("BOB@x.com"), 1)
        .await
        .unwrap();

    assert_eq!(ids(&page.items), vec![bob.id]);
    assert_that!(page.total, eq(1));
}

#[tokio::test]
async fn given_email_keyword_with_surrounding_spaces_when_searching_then_no_match() {
    let store = MemoryStore::new();
    store.add_user("Bob", "Stone", "bob@x.com");

    let page = QueryService::new(&store, &store)
        .search_users(Some(" bob@x.com "), 1)
        .await
        .unwrap();

    assert_that!(page.items.len(), eq(0));
    assert_that!(page.total, eq(0));
}

#[tokio::test]
async fn given_plain_keyword_when_searching_then_first_or_last_name_substring_match() {
    let store = MemoryStore::new();
    let bob = store.add_user("Bob", "Stone", "bob@x.com");
    let jacob = store.add_user("Jane", "Jacobs", "jane@x.com");
    store.add_user("Alice", "Liddell", "bo@x.com");

    let page = QueryService::new(&store, &store)
        .search_users(Some("BO"), 1)
        .await
        .unwrap();

    let mut found = ids(&page.items);
    let mut expected = vec![bob.id, jacob.id];
    found.sort();
    expected.sort();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn given_no_keyword_when_searching_then_missing_field() {
    let store = MemoryStore::new();

    let result = QueryService::new(&store, &store).search_users(None, 1).await;

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_that!(field, eq("q")),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[tokio::test]
async fn given_eleven_matches_when_searching_then_paged_by_ten() {
    let store = MemoryStore::new();
    for n in 0..11 {
        store.add_user(&format!("Sam{n}"), "Smith", &format!("sam{n}@x.com"));
    }
    let query = QueryService::new(&store, &store);

    let first = query.search_users(Some("smith"), 1).await.unwrap();
    let second = query.search_users(Some("smith"), 2).await.unwrap();

    assert_that!(first.items.len(), eq(10));
    assert_that!(first.total, eq(11));
    assert_eq!(first.next_page(), Some(2));
    assert_that!(second.items.len(), eq(1));
    assert_eq!(second.next_page(), None);
}

#[tokio::test]
async fn given_page_past_the_end_when_searching_then_not_found() {
    let store = MemoryStore::new();
    store.add_user("Sam", "Smith", "sam@x.com");

    let result = QueryService::new(&store, &store)
        .search_users(Some("smith"), 2)
        .await;

    assert!(matches!(result, Err(CoreError::NotFound { entity: "Page", .. })));
}

#[tokio::test]
async fn given_no_matches_when_searching_first_page_then_empty_page() {
    let store = MemoryStore::new();

    let page = QueryService::new(&store, &store)
        .search_users(Some("nobody"), 1)
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_that!(page.total, eq(0));
}
