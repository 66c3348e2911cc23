//! Pagination types for listings.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self::bounded(page, page_size, MAX_PAGE_SIZE)
    }

    /// Create a page request with a caller-supplied page size ceiling.
    pub fn bounded(page: u64, page_size: u64, max_page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Number of records fetched to detect a following page.
    pub fn fetch_limit(&self) -> usize {
        self.page_size as usize + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Total item count of a listing.
///
/// `Estimated` totals come from the heuristic used when the store cannot
/// count; they drive page affordances only and are not authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalItems {
    /// Counted by the store.
    Exact(u64),
    /// Derived from the current page.
    Estimated(u64),
}

impl TotalItems {
    /// Estimate a total from the page just fetched.
    ///
    /// Undercounts whenever more than one page follows the current one.
    pub fn estimate(page: u64, page_size: u64, items_on_page: u64, has_next_page: bool) -> Self {
        let total = if has_next_page {
            page * page_size + 1
        } else {
            page.saturating_sub(1) * page_size + items_on_page
        };
        Self::Estimated(total)
    }

    /// The numeric value, exact or not.
    pub fn value(&self) -> u64 {
        match self {
            Self::Exact(n) | Self::Estimated(n) => *n,
        }
    }

    /// Whether the value is a heuristic estimate.
    pub fn is_estimate(&self) -> bool {
        matches!(self, Self::Estimated(_))
    }
}

/// Position of a page within a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page number actually served (1-based).
    pub current_page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Set when `total_items` is an estimate rather than a store count.
    pub total_items_estimated: bool,
    /// Total number of pages, at least 1.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next_page: bool,
    /// Whether there is a previous page.
    pub has_prev_page: bool,
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Position of this page.
    pub pagination: PageInfo,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    ///
    /// `has_next_page` comes from the fetch itself (one extra record was
    /// found), not from the total, which may be an estimate.
    pub fn new(
        data: Vec<T>,
        page: u64,
        page_size: u64,
        total: TotalItems,
        has_next_page: bool,
    ) -> Self {
        let total_items = total.value();
        let total_pages = total_items.div_ceil(page_size.max(1)).max(1);
        Self {
            data,
            pagination: PageInfo {
                current_page: page,
                page_size,
                total_items,
                total_items_estimated: total.is_estimate(),
                total_pages,
                has_next_page,
                has_prev_page: page > 1,
            },
        }
    }

    /// Create an empty first page.
    pub fn empty(page_size: u64) -> Self {
        Self {
            data: Vec::new(),
            pagination: PageInfo {
                current_page: 1,
                page_size,
                total_items: 0,
                total_items_estimated: false,
                total_pages: 1,
                has_next_page: false,
                has_prev_page: false,
            },
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
