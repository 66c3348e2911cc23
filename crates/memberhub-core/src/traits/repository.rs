//! Repository trait for name-indexed reference data.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::lookup::{FindOrCreate, ListFilters, NameLookup};
use crate::types::pagination::{PageRequest, PageResponse};

/// Persistence operations for one kind of name-indexed reference record.
///
/// Reads are best-effort: failures are logged by the implementation and
/// surface as empty results. Writes return [`AppResult`] so callers can
/// report the failure and leave their state unchanged.
#[async_trait]
pub trait ReferenceRepository: Send + Sync + 'static {
    /// The stored record.
    type Record: Send + Sync + 'static;
    /// Payload for creating a record.
    type NewRecord: Send + Sync + 'static;
    /// Partial payload for updating a record.
    type Changes: Send + Sync + 'static;

    /// Look a record up by display name, offering suggestions on a miss.
    async fn find_by_name(&self, name: &str) -> NameLookup<Self::Record>;

    /// Create a record on behalf of `actor_id`.
    ///
    /// A name without any letter or digit cannot be searched and returns a
    /// `Validation` error.
    async fn create(&self, data: Self::NewRecord, actor_id: &str) -> AppResult<Self::Record>;

    /// Read a record. `None` when missing or unreadable.
    async fn get_by_id(&self, id: &str) -> Option<Self::Record>;

    /// Every record matching `filters`, unpaginated.
    async fn get_all(&self, filters: &ListFilters) -> Vec<Self::Record>;

    /// One page of records matching `filters`.
    async fn get_paginated(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> PageResponse<Self::Record>;

    /// Apply `changes` and return the updated record.
    ///
    /// A new name without any letter or digit returns a `Validation` error.
    async fn update(&self, id: &str, changes: Self::Changes) -> AppResult<Option<Self::Record>>;

    /// Delete a record.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Return the record named `name`, creating it from `extra` if needed.
    async fn find_or_create(
        &self,
        name: &str,
        actor_id: &str,
        extra: Option<Self::NewRecord>,
    ) -> AppResult<FindOrCreate>;
}
