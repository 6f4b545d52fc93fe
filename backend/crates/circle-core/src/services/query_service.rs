use crate::{
    CallerContext, CoreError, CoreResult, FriendRequest, FriendRequestStore, Page, PageRequest,
    SEARCH_PAGE_SIZE, User, UserStore,
};

use std::collections::HashSet;

/// Read-side views derived from the relationship store
pub struct QueryService<'a, U: UserStore + ?Sized, R: FriendRequestStore + ?Sized> {
    users: &'a U,
    requests: &'a R,
}

impl<'a, U: UserStore + ?Sized, R: FriendRequestStore + ?Sized> QueryService<'a, U, R> {
    pub fn new(users: &'a U, requests: &'a R) -> Self {
        Self { users, requests }
    }

    /// Friends of the caller, each listed once
    pub async fn list_friends(&self, ctx: &CallerContext) -> CoreResult<Vec<User>> {
        let friends = self.requests.find_friends(ctx.user_id).await?;

        let mut seen = HashSet::with_capacity(friends.len());
        Ok(friends
            .into_iter()
            .filter(|user| user.id != ctx.user_id && seen.insert(user.id))
            .collect())
    }

    pub async fn list_pending_received(
        &self,
        ctx: &CallerContext,
    ) -> CoreResult<Vec<FriendRequest>> {
        let requests = self.requests.find_pending_received(ctx.user_id).await?;

        Ok(requests
            .into_iter()
            .filter(|r| r.is_pending() && r.receiver_id == ctx.user_id)
            .collect())
    }

    /// `@` in the keyword selects an exact email match, anything else a
    /// first/last name substring match. Pages hold [`SEARCH_PAGE_SIZE`] users.
    ///
    /// The email keyword is only lowercased, never trimmed.
    pub async fn search_users(&self, keyword: Option<&str>, page: u32) -> CoreResult<Page<User>> {
        let keyword = keyword.ok_or_else(|| CoreError::missing_field("q"))?;
        let request = PageRequest::new(page, SEARCH_PAGE_SIZE)?;

        let results = if keyword.contains('@') {
            self.users
                .search_by_email(&keyword.to_lowercase(), request)
                .await?
        } else {
            self.users.search_by_name(keyword, request).await?
        };

        // Only the first page may be empty
        if results.page > 1 && results.page > results.total_pages() {
            return Err(CoreError::not_found("Page", results.page));
        }

        Ok(results)
    }
}
