//! Company management.

use std::sync::Arc;

use tracing::instrument;

use memberhub_core::result::AppResult;
use memberhub_core::traits::repository::ReferenceRepository;
use memberhub_core::traits::service::Service;
use memberhub_core::types::lookup::{FindOrCreate, ListFilters, NameLookup};
use memberhub_core::types::pagination::{PageRequest, PageResponse};
use memberhub_entity::company::{Company, CreateCompany, UpdateCompany};

/// Repository backing [`CompanyService`].
pub type CompanyRepositoryHandle = Arc<
    dyn ReferenceRepository<Record = Company, NewRecord = CreateCompany, Changes = UpdateCompany>,
>;

/// Entry point for company reference data.
#[derive(Clone)]
pub struct CompanyService {
    /// Company repository.
    repo: CompanyRepositoryHandle,
}

impl std::fmt::Debug for CompanyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyService").finish_non_exhaustive()
    }
}

impl Service for CompanyService {}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(repo: CompanyRepositoryHandle) -> Self {
        Self { repo }
    }

    /// Looks a company up by name, with suggestions on a miss.
    #[instrument(level = "debug", skip(self))]
    pub async fn find_by_name(&self, name: &str) -> NameLookup<Company> {
        self.repo.find_by_name(name).await
    }

    /// Creates a company on behalf of `actor_id`.
    #[instrument(level = "debug", skip(self, data))]
    pub async fn create(&self, data: CreateCompany, actor_id: &str) -> AppResult<Company> {
        self.repo.create(data, actor_id).await
    }

    /// Gets a company by id.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Option<Company> {
        self.repo.get_by_id(id).await
    }

    /// Lists every matching company.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_all(&self, filters: &ListFilters) -> Vec<Company> {
        self.repo.get_all(filters).await
    }

    /// Lists one page of matching companies.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_paginated(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> PageResponse<Company> {
        self.repo.get_paginated(filters, page).await
    }

    /// Updates a company.
    #[instrument(level = "debug", skip(self, changes))]
    pub async fn update(&self, id: &str, changes: UpdateCompany) -> AppResult<Option<Company>> {
        self.repo.update(id, changes).await
    }

    /// Deletes a company.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }

    /// Returns the company named `name`, creating it if needed.
    #[instrument(level = "debug", skip(self, extra))]
    pub async fn find_or_create(
        &self,
        name: &str,
        actor_id: &str,
        extra: Option<CreateCompany>,
    ) -> AppResult<FindOrCreate> {
        self.repo.find_or_create(name, actor_id, extra).await
    }
}
