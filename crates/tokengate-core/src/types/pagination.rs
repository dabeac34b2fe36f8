//! Page-based pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page a caller may ask for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Which slice of a listing to return. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, at least 1.
    pub page: u64,
    /// Items per page, between 1 and [`MAX_PAGE_SIZE`].
    pub limit: u64,
}

impl PageRequest {
    /// Builds a request, clamping both values into range.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of a listing plus what the caller needs to fetch the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Page number.
    pub page: u64,
    /// Requested page size.
    pub limit: u64,
    /// Items across all pages.
    pub total_items: u64,
    /// Whether a later page holds more items.
    pub has_next: bool,
}

impl<T> PageResponse<T> {
    /// Wraps the items of `request`'s page out of `total_items`.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let seen = request.offset().saturating_add(items.len() as u64);
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total_items,
            has_next: seen < total_items,
        }
    }

    /// Converts every item, keeping the paging fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total_items: self.total_items,
            has_next: self.has_next,
        }
    }
}
