use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default number of rows returned by paginated list endpoints
pub const DEFAULT_PER_PAGE: u64 = 50;
/// Upper bound on the page size a client may request
pub const MAX_PER_PAGE: u64 = 100;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// One page of a larger result set
#[derive(Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filter across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u64,
    pub per_page: u64,
}

/// Resolved page window for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Clamps client supplied values: pages start at 1, page size defaults to
    /// [`DEFAULT_PER_PAGE`] and never exceeds [`MAX_PER_PAGE`].
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    /// Zero-based page index as expected by sea-orm paginators
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Wraps one page of rows fetched with this window
    pub fn wrap<T>(&self, items: Vec<T>, total: u64) -> Paginated<T> {
        Paginated {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
