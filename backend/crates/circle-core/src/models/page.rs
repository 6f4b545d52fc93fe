use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fixed number of users returned per search page
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// A 1-based page window into an ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    #[track_caller]
    pub fn new(page: u32, page_size: u32) -> CoreResult<Self> {
        if page == 0 {
            return Err(CoreError::Validation {
                message: "page must be 1 or greater".to_string(),
                field: Some("page".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if page_size == 0 {
            return Err(CoreError::Validation {
                message: "page_size must be 1 or greater".to_string(),
                field: Some("page_size".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { page, page_size })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of matches across all pages
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.total_pages()).then(|| self.page + 1)
    }

    pub fn previous_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
