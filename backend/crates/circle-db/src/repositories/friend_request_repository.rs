use crate::connection::row::{timestamp_column, uuid_column};
use crate::repositories::user_repository::user_from_row;
use crate::{DbError, Result as DbErrorResult};

use circle_core::{
    CoreError, CoreResult, FriendRequest, FriendRequestStatus, FriendRequestStore, InsertOutcome,
    User,
};

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "friend_requests";

pub struct FriendRequestRepository {
    pool: SqlitePool,
}

impl FriendRequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a pending request. The partial unique index on pending
    /// (sender, receiver) pairs turns a concurrent duplicate into `Duplicate`.
    pub async fn create(&self, request: &FriendRequest) -> DbErrorResult<InsertOutcome> {
        let result = sqlx::query(
            r#"
              INSERT INTO friend_requests (
                  id, sender_id, receiver_id, status, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(request.id.to_string())
        .bind(request.sender_id.to_string())
        .bind(request.receiver_id.to_string())
        .bind(request.status().as_str())
        .bind(request.created_at.timestamp_millis())
        .bind(request.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => {
                let err = DbError::from(e);
                if err.is_unique_violation() {
                    Ok(InsertOutcome::Duplicate)
                } else {
                    Err(err)
                }
            }
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<FriendRequest>> {
        let row = sqlx::query(
            r#"
              SELECT id, sender_id, receiver_id, status, created_at, updated_at
              FROM friend_requests
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(request_from_row).transpose()
    }

    pub async fn has_pending(&self, sender_id: Uuid, receiver_id: Uuid) -> DbErrorResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            r#"
              SELECT EXISTS (
                  SELECT 1 FROM friend_requests
                  WHERE sender_id = ? AND receiver_id = ? AND status = 'pending'
              )
              "#,
        )
        .bind(sender_id.to_string())
        .bind(receiver_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    pub async fn count_sent_since(
        &self,
        sender_id: Uuid,
        since: DateTime<Utc>,
    ) -> DbErrorResult<u32> {
        let count: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*) FROM friend_requests
              WHERE sender_id = ? AND created_at >= ?
              "#,
        )
        .bind(sender_id.to_string())
        .bind(since.timestamp_millis())
        .fetch_one(&self.pool)
        .await?;

        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// Conditional write: only a row that is still pending is updated
    pub async fn update_status_if_pending(&self, request: &FriendRequest) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE friend_requests
              SET status = ?, updated_at = ?
              WHERE id = ? AND status = 'pending'
              "#,
        )
        .bind(request.status().as_str())
        .bind(request.updated_at.timestamp_millis())
        .bind(request.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn find_friends(&self, user_id: Uuid) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
              SELECT DISTINCT u.id, u.email, u.username, u.first_name, u.last_name,
                     u.password_hash, u.created_at
              FROM users u
              JOIN friend_requests fr
                ON (fr.sender_id = u.id AND fr.receiver_id = ?1)
                OR (fr.receiver_id = u.id AND fr.sender_id = ?1)
              WHERE fr.status = 'accepted' AND u.id <> ?1
              ORDER BY u.created_at, u.id
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    pub async fn find_pending_received(
        &self,
        user_id: Uuid,
    ) -> DbErrorResult<Vec<FriendRequest>> {
        let rows = sqlx::query(
            r#"
              SELECT id, sender_id, receiver_id, status, created_at, updated_at
              FROM friend_requests
              WHERE receiver_id = ? AND status = 'pending'
              ORDER BY created_at ASC, id ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(request_from_row).collect()
    }
}

fn request_from_row(row: &SqliteRow) -> DbErrorResult<FriendRequest> {
    let raw_status: String = row.try_get("status")?;
    let status = FriendRequestStatus::from_str(&raw_status)
        .map_err(|e| DbError::corrupt(TABLE, e.to_string()))?;

    Ok(FriendRequest::restore(
        uuid_column(row, TABLE, "id")?,
        uuid_column(row, TABLE, "sender_id")?,
        uuid_column(row, TABLE, "receiver_id")?,
        status,
        timestamp_column(row, TABLE, "created_at")?,
        timestamp_column(row, TABLE, "updated_at")?,
    ))
}

#[async_trait]
impl FriendRequestStore for FriendRequestRepository {
    async fn insert_pending(&self, request: &FriendRequest) -> CoreResult<InsertOutcome> {
        self.create(request).await.map_err(CoreError::from)
    }

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<FriendRequest>> {
        FriendRequestRepository::find_by_id(self, id)
            .await
            .map_err(CoreError::from)
    }

    async fn has_pending(&self, sender_id: Uuid, receiver_id: Uuid) -> CoreResult<bool> {
        FriendRequestRepository::has_pending(self, sender_id, receiver_id)
            .await
            .map_err(CoreError::from)
    }

    async fn count_sent_since(&self, sender_id: Uuid, since: DateTime<Utc>) -> CoreResult<u32> {
        FriendRequestRepository::count_sent_since(self, sender_id, since)
            .await
            .map_err(CoreError::from)
    }

    async fn update_status_if_pending(&self, request: &FriendRequest) -> CoreResult<bool> {
        FriendRequestRepository::update_status_if_pending(self, request)
            .await
            .map_err(CoreError::from)
    }

    async fn find_friends(&self, user_id: Uuid) -> CoreResult<Vec<User>> {
        FriendRequestRepository::find_friends(self, user_id)
            .await
            .map_err(CoreError::from)
    }

    async fn find_pending_received(&self, user_id: Uuid) -> CoreResult<Vec<FriendRequest>> {
        FriendRequestRepository::find_pending_received(self, user_id)
            .await
            .map_err(CoreError::from)
    }
}
