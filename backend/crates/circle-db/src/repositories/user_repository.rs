use crate::Result as DbErrorResult;
use crate::connection::row::{escape_like, timestamp_column, uuid_column};

use circle_core::{CoreError, CoreResult, InsertOutcome, Page, PageRequest, User, UserStore};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "users";

const SELECT_USER: &str = r#"
    SELECT id, email, username, first_name, last_name, password_hash, created_at
    FROM users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user; a taken email yields `Duplicate` instead of an error
    pub async fn create(&self, user: &User) -> DbErrorResult<InsertOutcome> {
        let result = sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, username, first_name, last_name, password_hash, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => {
                let err = crate::DbError::from(e);
                if err.is_unique_violation() {
                    log::debug!("Signup rejected, email already registered");
                    Ok(InsertOutcome::Duplicate)
                } else {
                    Err(err)
                }
            }
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("{SELECT_USER} WHERE email = ? COLLATE NOCASE"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn search_by_email(
        &self,
        email: &str,
        page: PageRequest,
    ) -> DbErrorResult<Page<User>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ? COLLATE NOCASE")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        let rows = sqlx::query(&format!(
            "{SELECT_USER} WHERE email = ? COLLATE NOCASE ORDER BY created_at, id LIMIT ? OFFSET ?"
        ))
        .bind(email)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        to_page(rows, total, page)
    }

    /// SQLite `LIKE` folds ASCII case only
    pub async fn search_by_name(
        &self,
        fragment: &str,
        page: PageRequest,
    ) -> DbErrorResult<Page<User>> {
        let pattern = format!("%{}%", escape_like(fragment));
        let filter = r"first_name LIKE ?1 ESCAPE '\' OR last_name LIKE ?1 ESCAPE '\'";

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM users WHERE {filter}"))
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(&format!(
            "{SELECT_USER} WHERE {filter} ORDER BY created_at, id LIMIT ?2 OFFSET ?3"
        ))
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        to_page(rows, total, page)
    }
}

pub(crate) fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: uuid_column(row, TABLE, "id")?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        password_hash: row.try_get("password_hash")?,
        created_at: timestamp_column(row, TABLE, "created_at")?,
    })
}

fn to_page(rows: Vec<SqliteRow>, total: i64, page: PageRequest) -> DbErrorResult<Page<User>> {
    let items = rows
        .iter()
        .map(user_from_row)
        .collect::<DbErrorResult<Vec<_>>>()?;

    Ok(Page {
        items,
        total: u64::try_from(total).unwrap_or_default(),
        page: page.page,
        page_size: page.page_size,
    })
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, user: &User) -> CoreResult<InsertOutcome> {
        self.create(user).await.map_err(CoreError::from)
    }

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<User>> {
        UserRepository::find_by_id(self, id)
            .await
            .map_err(CoreError::from)
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>> {
        UserRepository::find_by_email(self, email)
            .await
            .map_err(CoreError::from)
    }

    async fn search_by_email(&self, email: &str, page: PageRequest) -> CoreResult<Page<User>> {
        UserRepository::search_by_email(self, email, page)
            .await
            .map_err(CoreError::from)
    }

    async fn search_by_name(&self, fragment: &str, page: PageRequest) -> CoreResult<Page<User>> {
        UserRepository::search_by_name(self, fragment, page)
            .await
            .map_err(CoreError::from)
    }
}
