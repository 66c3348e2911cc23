//! Document store trait for pluggable database backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::document::{DocumentWrite, StoredDocument};
use crate::types::query::Query;

/// Client contract of a hosted document database.
///
/// Documents live in named collections and are addressed by a
/// store-assigned identifier. Timeouts and retries are the backend's
/// concern; callers see a single result per call.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read one document. Returns `None` if it does not exist.
    async fn get_doc(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>>;

    /// Run a query and return the matching documents in query order.
    async fn get_docs(&self, query: &Query) -> AppResult<Vec<StoredDocument>>;

    /// Insert a new document and return its identifier.
    async fn add_doc(&self, collection: &str, write: DocumentWrite) -> AppResult<String>;

    /// Merge fields into an existing document.
    ///
    /// Fails with `NotFound` if the document does not exist.
    async fn update_doc(&self, collection: &str, id: &str, write: DocumentWrite) -> AppResult<()>;

    /// Delete a document. Deleting a missing document succeeds.
    async fn delete_doc(&self, collection: &str, id: &str) -> AppResult<()>;

    /// Count the documents matching a query, ignoring its limit and cursor.
    ///
    /// Backends may reject query shapes they cannot aggregate; callers must
    /// tolerate failure.
    async fn count(&self, query: &Query) -> AppResult<u64>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
