use crate::tests::{MemoryStore, PlainHasher};
use crate::{CoreError, IdentityService, PageRequest, SignupInput};

use googletest::prelude::*;
use uuid::Uuid;

fn signup_input(email: &str) -> SignupInput {
    SignupInput {
        email: email.to_string(),
        username: "alice".to_string(),
        password: "correct horse".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
    }
}

#[tokio::test]
async fn given_mixed_case_email_when_signing_up_then_email_stored_lowercase() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);

    let user = service
        .create_user(signup_input("Alice@Example.COM"))
        .await
        .unwrap();

    assert_that!(user.email, eq("alice@example.com"));
    let stored = service.find_by_id(user.id).await.unwrap();
    assert_that!(stored.email, eq("alice@example.com"));
}

#[tokio::test]
async fn given_existing_email_when_signing_up_in_other_case_then_duplicate_email() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    service
        .create_user(signup_input("alice@example.com"))
        .await
        .unwrap();

    let result = service.create_user(signup_input("ALICE@example.com")).await;

    assert!(matches!(result, Err(CoreError::DuplicateEmail { .. })));
}

#[tokio::test]
async fn given_blank_field_when_signing_up_then_first_missing_field_reported_and_nothing_stored() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    let mut input = signup_input("alice@example.com");
    input.password = String::new();
    input.last_name = "   ".to_string();

    let result = service.create_user(input).await;

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_that!(field, eq("password")),
        other => panic!("expected MissingField, got {other:?}"),
    }
    let login = service
        .authenticate("alice@example.com", "correct horse")
        .await;
    assert!(matches!(login, Err(CoreError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_created_user_when_authenticating_with_any_email_case_then_returns_user() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    let created = service
        .create_user(signup_input("alice@example.com"))
        .await
        .unwrap();

    let user = service
        .authenticate("Alice@Example.com", "correct horse")
        .await
        .unwrap();

    assert_that!(user.id, eq(created.id));
}

#[tokio::test]
async fn given_wrong_password_or_unknown_email_when_authenticating_then_invalid_credentials() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    service
        .create_user(signup_input("alice@example.com"))
        .await
        .unwrap();

    let wrong_password = service.authenticate("alice@example.com", "nope").await;
    let unknown_email = service
        .authenticate("nobody@example.com", "correct horse")
        .await;
    let blank = service.authenticate("", "").await;

    assert!(matches!(wrong_password, Err(CoreError::InvalidCredentials { .. })));
    assert!(matches!(unknown_email, Err(CoreError::InvalidCredentials { .. })));
    assert!(matches!(blank, Err(CoreError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_finding_user_then_not_found() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);

    let result = service.find_by_id(Uuid::new_v4()).await;

    assert!(matches!(result, Err(CoreError::NotFound { entity: "User", .. })));
}

#[tokio::test]
async fn given_mixed_case_email_when_searching_exact_then_matches_case_insensitively() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    store.add_user("Bob", "Stone", "bob@x.com");
    store.add_user("Bobby", "Stone", "bobby@x.com");

    let page = service
        .search_by_email_exact("BOB@X.com", PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();

    assert_that!(page.total, eq(1));
    assert_eq!(page.items[0].email, "bob@x.com");
}

#[tokio::test]
async fn given_padded_email_when_searching_exact_then_not_trimmed() {
    let store = MemoryStore::new();
    let service = IdentityService::new(&store, &PlainHasher);
    store.add_user("Bob", "Stone", "bob@x.com");

    let page = service
        .search_by_email_exact(" bob@x.com ", PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();

    assert_that!(page.total, eq(0));
}
