//! Profession management.

use std::sync::Arc;

use tracing::instrument;

use memberhub_core::result::AppResult;
use memberhub_core::traits::repository::ReferenceRepository;
use memberhub_core::traits::service::Service;
use memberhub_core::types::lookup::{FindOrCreate, ListFilters, NameLookup};
use memberhub_core::types::pagination::{PageRequest, PageResponse};
use memberhub_entity::profession::{CreateProfession, Profession, UpdateProfession};

/// Repository backing [`ProfessionService`].
pub type ProfessionRepositoryHandle = Arc<
    dyn ReferenceRepository<
            Record = Profession,
            NewRecord = CreateProfession,
            Changes = UpdateProfession,
        >,
>;

/// Entry point for profession reference data.
#[derive(Clone)]
pub struct ProfessionService {
    repo: ProfessionRepositoryHandle,
}

impl std::fmt::Debug for ProfessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfessionService").finish_non_exhaustive()
    }
}

impl Service for ProfessionService {}

impl ProfessionService {
    /// Creates a new profession service.
    pub fn new(repo: ProfessionRepositoryHandle) -> Self {
        Self { repo }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn find_by_name(&self, name: &str) -> NameLookup<Profession> {
        self.repo.find_by_name(name).await
    }

    #[instrument(level = "debug", skip(self, data))]
    pub async fn create(&self, data: CreateProfession, actor_id: &str) -> AppResult<Profession> {
        self.repo.create(data, actor_id).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Option<Profession> {
        self.repo.get_by_id(id).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_all(&self, filters: &ListFilters) -> Vec<Profession> {
        self.repo.get_all(filters).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_paginated(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> PageResponse<Profession> {
        self.repo.get_paginated(filters, page).await
    }

    #[instrument(level = "debug", skip(self, changes))]
    pub async fn update(
        &self,
        id: &str,
        changes: UpdateProfession,
    ) -> AppResult<Option<Profession>> {
        self.repo.update(id, changes).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }

    /// Returns the profession named `name`, creating it if needed.
    #[instrument(level = "debug", skip(self, extra))]
    pub async fn find_or_create(
        &self,
        name: &str,
        actor_id: &str,
        extra: Option<CreateProfession>,
    ) -> AppResult<FindOrCreate> {
        self.repo.find_or_create(name, actor_id, extra).await
    }
}
