//! Pagination cursor cache backed by dashmap.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::keys;

/// Remembers the last record id of each fetched page.
///
/// Entries are keyed by `(search key, target page)`. There is no finer
/// invalidation than [`CursorCache::invalidate_all`]: any write to the
/// collection can shift every page boundary of every filter.
///
/// Clones share the same entries.
#[derive(Debug, Clone)]
pub struct CursorCache {
    /// Collection whose listings are cached.
    collection: String,
    /// Cursor key → id of the last record on the preceding page.
    cursors: Arc<DashMap<String, String>>,
}

impl CursorCache {
    /// Create an empty cache for one collection.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            cursors: Arc::new(DashMap::new()),
        }
    }

    /// Cursor that starts `page` of the listing for `search_key`.
    pub fn get(&self, search_key: Option<&str>, page: u64) -> Option<String> {
        let key = keys::page_cursor(&self.collection, search_key, page);
        self.cursors.get(&key).map(|entry| entry.value().clone())
    }

    /// Record that `page` of the listing for `search_key` starts after `doc_id`.
    pub fn remember(&self, search_key: Option<&str>, page: u64, doc_id: impl Into<String>) {
        let key = keys::page_cursor(&self.collection, search_key, page);
        self.cursors.insert(key, doc_id.into());
    }

    /// Drop every cursor of every listing.
    pub fn invalidate_all(&self) {
        let dropped = self.cursors.len();
        self.cursors.clear();
        if dropped > 0 {
            debug!(collection = %self.collection, dropped, "Invalidated pagination cursors");
        }
    }

    /// Number of cached cursors.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Whether no cursor is cached.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}
