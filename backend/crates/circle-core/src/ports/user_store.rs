use crate::{CoreResult, InsertOutcome, Page, PageRequest, User};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns `Duplicate` when the (normalized) email is already taken
    async fn insert(&self, user: &User) -> CoreResult<InsertOutcome>;

    async fn find_by_id(&self, id: Uuid) -> CoreResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>>;

    /// Exact, case-insensitive email match
    async fn search_by_email(&self, email: &str, page: PageRequest) -> CoreResult<Page<User>>;

    /// Case-insensitive substring match on first name or last name
    async fn search_by_name(&self, fragment: &str, page: PageRequest) -> CoreResult<Page<User>>;
}
