use crate::{User, normalize_email};

use proptest::prelude::*;

fn sample_user(email: &str) -> User {
    User::new(
        email,
        "bob".to_string(),
        "Bob".to_string(),
        "Builder".to_string(),
        "super-secret-hash".to_string(),
    )
}

#[test]
fn given_mixed_case_email_when_user_created_then_stored_lowercase() {
    let user = sample_user("  Bob@Example.COM ");

    assert_eq!(user.email, "bob@example.com");
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = sample_user("bob@example.com");

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("super-secret-hash"));
    assert!(!json.contains("password_hash"));
    assert!(json.contains("\"email\":\"bob@example.com\""));
}

proptest! {
    #[test]
    fn given_any_ascii_email_when_normalized_then_lowercase_and_idempotent(
        local in "[A-Za-z0-9._]{1,16}",
        domain in "[A-Za-z0-9]{1,12}\\.[A-Za-z]{2,4}",
    ) {
        let email = format!("{local}@{domain}");
        let normalized = normalize_email(&email);

        prop_assert_eq!(&normalized, &email.to_lowercase());
        prop_assert_eq!(normalize_email(&normalized), normalized.clone());
    }
}
