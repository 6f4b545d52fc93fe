use crate::UserDto;

use circle_core::{Page, User};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matches across all pages
    pub count: u64,
    pub page: u32,
    pub page_size: u32,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<UserDto>,
}

impl From<Page<User>> for SearchResponse {
    fn from(page: Page<User>) -> Self {
        Self {
            count: page.total,
            page: page.page,
            page_size: page.page_size,
            next: page.next_page(),
            previous: page.previous_page(),
            results: page.items.into_iter().map(UserDto::from).collect(),
        }
    }
}
