use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,

    /// Always stored lowercase, see [`normalize_email`]
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        email: &str,
        username: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            username,
            first_name,
            last_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Canonical form used for every email comparison and for storage
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
