use circle_core::{FriendRequest, User};
use circle_db::{FriendRequestRepository, UserRepository};

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

/// Builds a user with a unique, derived email
pub fn create_test_user(first_name: &str, last_name: &str) -> User {
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    User::new(
        &email,
        first_name.to_lowercase(),
        first_name.to_string(),
        last_name.to_string(),
        String::from("hash"),
    )
}

/// Inserts a user, offsetting `created_at` so listing order is deterministic
pub async fn insert_test_user(
    pool: &SqlitePool,
    first_name: &str,
    last_name: &str,
    offset_secs: i64,
) -> User {
    let mut user = create_test_user(first_name, last_name);
    user.created_at = base_time() + Duration::seconds(offset_secs);

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to insert test user");

    user
}

/// Inserts a pending request from `sender` to `receiver` at `created_at`
pub async fn insert_test_request(
    pool: &SqlitePool,
    sender: &User,
    receiver: &User,
    created_at: DateTime<Utc>,
) -> FriendRequest {
    let request = FriendRequest::new(sender.id, receiver.id, created_at);

    FriendRequestRepository::new(pool.clone())
        .create(&request)
        .await
        .expect("Failed to insert test request");

    request
}

/// Millisecond-aligned base so stored timestamps round-trip exactly
pub fn base_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).expect("valid timestamp")
}
