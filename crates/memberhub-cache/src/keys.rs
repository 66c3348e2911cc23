//! Cache key builders for all MemberHub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all MemberHub cache keys.
const PREFIX: &str = "memberhub";

/// Placeholder for listings without a search term.
///
/// Normalized search keys only contain `[a-z0-9 ]`, so this cannot collide.
const NO_SEARCH: &str = "*";

// ── Pagination keys ────────────────────────────────────────

/// Cache key for the cursor that starts `page` of a listing.
///
/// The cursor is the id of the last record of page `page - 1` fetched with
/// the same search key.
pub fn page_cursor(collection: &str, search_key: Option<&str>, page: u64) -> String {
    format!(
        "{PREFIX}:{collection}:cursor:{}:p{page}",
        search_key.unwrap_or(NO_SEARCH)
    )
}
