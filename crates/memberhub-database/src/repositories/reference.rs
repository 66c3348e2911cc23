//! Generic repository for name-indexed reference records.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use validator::Validate;

use memberhub_cache::CursorCache;
use memberhub_core::error::AppError;
use memberhub_core::normalize::{normalize_name, prefix_upper_bound};
use memberhub_core::result::AppResult;
use memberhub_core::traits::repository::ReferenceRepository;
use memberhub_core::traits::store::DocumentStore;
use memberhub_core::types::document::{DocumentWrite, StoredDocument};
use memberhub_core::types::lookup::{FindOrCreate, ListFilters, MAX_SUGGESTIONS, NameLookup};
use memberhub_core::types::pagination::{PageRequest, PageResponse, TotalItems};
use memberhub_core::types::query::{FilterField, Query};
use memberhub_core::types::sorting::SortField;
use memberhub_entity::reference::{
    NewReferenceRecord, ReferenceChanges, ReferenceRecord, fields,
};

/// Documents fetched per batch when collecting name suggestions.
const SUGGESTION_BATCH_SIZE: usize = 20;

/// Repository over one collection of [`ReferenceRecord`]s.
///
/// Listings are ordered by `normalizedName` when searching and by
/// `createdAt` (newest first) otherwise. Pages beyond the first are reached
/// through cursors remembered while walking forward; a page without a known
/// cursor is served as page 1.
pub struct NameIndexedRepository<R> {
    store: Arc<dyn DocumentStore>,
    cursors: CursorCache,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for NameIndexedRepository<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cursors: self.cursors.clone(),
            _record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for NameIndexedRepository<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameIndexedRepository")
            .field("store", &self.store)
            .field("cursors", &self.cursors)
            .finish()
    }
}

impl<R: ReferenceRecord> NameIndexedRepository<R> {
    /// Create a repository over `R::COLLECTION` with an empty cursor cache.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            cursors: CursorCache::new(R::COLLECTION),
            _record: PhantomData,
        }
    }

    /// The pagination cursor cache of this repository.
    pub fn cursors(&self) -> &CursorCache {
        &self.cursors
    }

    /// Listing query for an optional normalized search key.
    fn base_query(search_key: Option<&str>) -> Query {
        let query = Query::collection(R::COLLECTION);
        match search_key {
            Some(key) => query
                .filter(FilterField::gte(fields::NORMALIZED_NAME, key))
                .filter(FilterField::lt(
                    fields::NORMALIZED_NAME,
                    prefix_upper_bound(key),
                ))
                .order_by(SortField::asc(fields::NORMALIZED_NAME)),
            None => query.order_by(SortField::desc(fields::CREATED_AT)),
        }
    }

    async fn read(&self, id: &str) -> AppResult<Option<R>> {
        self.store
            .get_doc(R::COLLECTION, id)
            .await?
            .map(|doc| doc.decode::<R>())
            .transpose()
    }

    fn decode_all(docs: &[StoredDocument]) -> AppResult<Vec<R>> {
        docs.iter().map(StoredDocument::decode::<R>).collect()
    }

    /// Normalized key of a display name, rejecting names with no searchable
    /// characters.
    fn search_key_of(name: &str) -> AppResult<String> {
        let key = normalize_name(name);
        if name.trim().is_empty() || key.is_empty() {
            return Err(AppError::validation(format!(
                "Name '{name}' must contain at least one letter or digit"
            )));
        }
        Ok(key)
    }

    async fn lookup(&self, key: &str) -> AppResult<NameLookup<R>> {
        let exact = Query::collection(R::COLLECTION)
            .filter(FilterField::eq(fields::NORMALIZED_NAME, key))
            .limit(1);
        if let Some(doc) = self.store.get_docs(&exact).await?.first() {
            return Ok(NameLookup::Found {
                entity: doc.decode()?,
            });
        }

        // Duplicate names can fill a batch, so keep going until enough
        // distinct names are found or the prefix matches run out.
        let mut similar = Self::base_query(Some(key)).limit(SUGGESTION_BATCH_SIZE);
        let mut suggestions: Vec<String> = Vec::new();
        loop {
            let batch = self.store.get_docs(&similar).await?;
            for doc in &batch {
                let Some(name) = doc.get(fields::NAME).and_then(|v| v.as_str()) else {
                    continue;
                };
                if !suggestions.iter().any(|s| s == name) {
                    suggestions.push(name.to_string());
                }
                if suggestions.len() == MAX_SUGGESTIONS {
                    return Ok(NameLookup::NotFound { suggestions });
                }
            }

            if batch.len() < SUGGESTION_BATCH_SIZE {
                break;
            }
            match batch.into_iter().last() {
                Some(last) => similar = similar.start_after(last),
                None => break,
            }
        }

        Ok(NameLookup::NotFound { suggestions })
    }

    async fn insert(&self, data: R::NewRecord, actor_id: &str) -> AppResult<R> {
        data.validate()?;
        let key = Self::search_key_of(data.name())?;

        let mut write = DocumentWrite::from_record(&data)?;
        write
            .set(fields::NORMALIZED_NAME, key)
            .set(fields::CREATED_BY, actor_id)
            .set_server_timestamp(fields::CREATED_AT)
            .set_server_timestamp(fields::UPDATED_AT);

        let id = self.store.add_doc(R::COLLECTION, write).await?;
        self.cursors.invalidate_all();

        let record = self.read(&id).await?.ok_or_else(|| {
            AppError::consistency(format!(
                "Record '{id}' not found in '{}' after creation",
                R::COLLECTION
            ))
        })?;

        info!(collection = R::COLLECTION, id = %id, actor_id, "Created record");
        Ok(record)
    }

    async fn modify(&self, id: &str, changes: R::Changes) -> AppResult<Option<R>> {
        changes.validate()?;

        let mut write = DocumentWrite::from_record(&changes)?;
        if let Some(name) = changes.name() {
            write.set(fields::NORMALIZED_NAME, Self::search_key_of(name)?);
        }
        write.set_server_timestamp(fields::UPDATED_AT);

        self.store.update_doc(R::COLLECTION, id, write).await?;
        self.cursors.invalidate_all();

        info!(collection = R::COLLECTION, id, "Updated record");
        self.read(id).await
    }

    /// Query that resumes at `page`, or `None` when page 1 must be served.
    async fn resume_query(
        &self,
        base: &Query,
        search_key: Option<&str>,
        page: u64,
    ) -> AppResult<Option<Query>> {
        if page <= 1 {
            return Ok(None);
        }

        let Some(cursor_id) = self.cursors.get(search_key, page) else {
            debug!(
                collection = R::COLLECTION,
                page,
                search = search_key.unwrap_or(""),
                "No cursor for page, restarting at page 1"
            );
            self.cursors.invalidate_all();
            return Ok(None);
        };

        match self.store.get_doc(R::COLLECTION, &cursor_id).await? {
            Some(cursor) => Ok(Some(base.clone().start_after(cursor))),
            None => {
                debug!(
                    collection = R::COLLECTION,
                    page,
                    cursor = %cursor_id,
                    "Cursor document is gone, restarting at page 1"
                );
                self.cursors.invalidate_all();
                Ok(None)
            }
        }
    }

    async fn paginate(
        &self,
        search_key: Option<&str>,
        request: PageRequest,
    ) -> AppResult<PageResponse<R>> {
        let base = Self::base_query(search_key);
        let (query, page) = match self.resume_query(&base, search_key, request.page).await? {
            Some(query) => (query, request.page),
            None => (base.clone(), 1),
        };

        let page_size = request.page_size as usize;
        let mut docs = self
            .store
            .get_docs(&query.limit(request.fetch_limit()))
            .await?;
        let has_next_page = docs.len() > page_size;
        docs.truncate(page_size);

        if let Some(last) = docs.last() {
            self.cursors.remember(search_key, page + 1, last.id.clone());
        }
        let records = Self::decode_all(&docs)?;

        let total = match self.store.count(&base).await {
            Ok(count) => TotalItems::Exact(count),
            Err(e) => {
                warn!(
                    collection = R::COLLECTION,
                    error = %e,
                    "Count unavailable, estimating total items"
                );
                TotalItems::estimate(
                    page,
                    request.page_size,
                    records.len() as u64,
                    has_next_page,
                )
            }
        };

        Ok(PageResponse::new(
            records,
            page,
            request.page_size,
            total,
            has_next_page,
        ))
    }
}

#[async_trait]
impl<R: ReferenceRecord> ReferenceRepository for NameIndexedRepository<R> {
    type Record = R;
    type NewRecord = R::NewRecord;
    type Changes = R::Changes;

    async fn find_by_name(&self, name: &str) -> NameLookup<R> {
        let key = normalize_name(name);
        if key.is_empty() {
            return NameLookup::none();
        }

        match self.lookup(&key).await {
            Ok(lookup) => lookup,
            Err(e) => {
                error!(collection = R::COLLECTION, lookup = name, error = %e, "Failed to look up by name");
                NameLookup::none()
            }
        }
    }

    async fn create(&self, data: R::NewRecord, actor_id: &str) -> AppResult<R> {
        self.insert(data, actor_id).await.inspect_err(|e| {
            error!(collection = R::COLLECTION, actor_id, error = %e, "Failed to create record");
        })
    }

    async fn get_by_id(&self, id: &str) -> Option<R> {
        match self.read(id).await {
            Ok(record) => record,
            Err(e) => {
                error!(collection = R::COLLECTION, id, error = %e, "Failed to read record");
                None
            }
        }
    }

    async fn get_all(&self, filters: &ListFilters) -> Vec<R> {
        let search_key = filters.search_key();
        let query = Self::base_query(search_key.as_deref());

        let result = match self.store.get_docs(&query).await {
            Ok(docs) => Self::decode_all(&docs),
            Err(e) => Err(e),
        };
        result.unwrap_or_else(|e| {
            error!(
                collection = R::COLLECTION,
                search = search_key.as_deref().unwrap_or(""),
                error = %e,
                "Failed to list records"
            );
            Vec::new()
        })
    }

    async fn get_paginated(&self, filters: &ListFilters, page: PageRequest) -> PageResponse<R> {
        let search_key = filters.search_key();
        match self.paginate(search_key.as_deref(), page).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    collection = R::COLLECTION,
                    page = page.page,
                    search = search_key.as_deref().unwrap_or(""),
                    error = %e,
                    "Failed to fetch page"
                );
                PageResponse::empty(page.page_size)
            }
        }
    }

    async fn update(&self, id: &str, changes: R::Changes) -> AppResult<Option<R>> {
        self.modify(id, changes).await.inspect_err(|e| {
            error!(collection = R::COLLECTION, id, error = %e, "Failed to update record");
        })
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete_doc(R::COLLECTION, id)
            .await
            .inspect_err(|e| {
                error!(collection = R::COLLECTION, id, error = %e, "Failed to delete record");
            })?;
        self.cursors.invalidate_all();

        info!(collection = R::COLLECTION, id, "Deleted record");
        Ok(())
    }

    async fn find_or_create(
        &self,
        name: &str,
        actor_id: &str,
        extra: Option<R::NewRecord>,
    ) -> AppResult<FindOrCreate> {
        if let NameLookup::Found { entity } = self.find_by_name(name).await {
            return Ok(FindOrCreate {
                id: entity.id().to_string(),
                is_new: false,
            });
        }

        let mut data = extra.unwrap_or_default();
        data.set_name(name.to_string());
        let created = self.create(data, actor_id).await?;

        Ok(FindOrCreate {
            id: created.id().to_string(),
            is_new: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberhub_core::error::ErrorKind;
    use memberhub_core::traits::store::DocumentStore;
    use memberhub_entity::company::{Company, CreateCompany, UpdateCompany};

    use crate::memory::MemoryDocumentStore;

    type Repo = NameIndexedRepository<Company>;

    fn repo_over(store: MemoryDocumentStore) -> Repo {
        Repo::new(Arc::new(store))
    }

    fn repo() -> Repo {
        repo_over(MemoryDocumentStore::default())
    }

    async fn seed(repo: &Repo, count: usize) -> Vec<Company> {
        let mut created = Vec::new();
        for i in 0..count {
            let company = repo
                .create(CreateCompany::named(format!("Company {i:02}")), "admin-1")
                .await
                .unwrap();
            created.push(company);
        }
        created
    }

    /// Store whose every operation fails.
    #[derive(Debug)]
    struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn get_doc(&self, _: &str, _: &str) -> AppResult<Option<StoredDocument>> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn get_docs(&self, _: &Query) -> AppResult<Vec<StoredDocument>> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn add_doc(&self, _: &str, _: DocumentWrite) -> AppResult<String> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn update_doc(&self, _: &str, _: &str, _: DocumentWrite) -> AppResult<()> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn delete_doc(&self, _: &str, _: &str) -> AppResult<()> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn count(&self, _: &Query) -> AppResult<u64> {
            Err(AppError::service_unavailable("store offline"))
        }
        async fn health_check(&self) -> AppResult<bool> {
            Ok(false)
        }
    }

    /// Store that accepts writes but never finds documents by id.
    #[derive(Debug, Default)]
    struct ForgetfulStore {
        inner: MemoryDocumentStore,
    }

    #[async_trait]
    impl DocumentStore for ForgetfulStore {
        async fn get_doc(&self, _: &str, _: &str) -> AppResult<Option<StoredDocument>> {
            Ok(None)
        }
        async fn get_docs(&self, query: &Query) -> AppResult<Vec<StoredDocument>> {
            self.inner.get_docs(query).await
        }
        async fn add_doc(&self, collection: &str, write: DocumentWrite) -> AppResult<String> {
            self.inner.add_doc(collection, write).await
        }
        async fn update_doc(&self, c: &str, id: &str, write: DocumentWrite) -> AppResult<()> {
            self.inner.update_doc(c, id, write).await
        }
        async fn delete_doc(&self, collection: &str, id: &str) -> AppResult<()> {
            self.inner.delete_doc(collection, id).await
        }
        async fn count(&self, query: &Query) -> AppResult<u64> {
            self.inner.count(query).await
        }
        async fn health_check(&self) -> AppResult<bool> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_create_sets_store_managed_fields() {
        let repo = repo();
        let company = repo
            .create(
                CreateCompany {
                    industry: Some("Energy".to_string()),
                    ..CreateCompany::named("  Total   Gabon ")
                },
                "admin-1",
            )
            .await
            .unwrap();

        assert_eq!(company.normalized_name, normalize_name(&company.name));
        assert_eq!(company.normalized_name, "total gabon");
        assert_eq!(company.created_by, "admin-1");
        assert_eq!(company.created_at, company.updated_at);
        assert_eq!(company.industry.as_deref(), Some("Energy"));
        assert_eq!(company.address, None);

        let fetched = repo.get_by_id(&company.id).await.unwrap();
        assert_eq!(fetched, company);
    }

    #[tokio::test]
    async fn test_create_rejects_unsearchable_names() {
        let repo = repo();
        for name in ["", "   ", "!!!"] {
            let err = repo
                .create(CreateCompany::named(name), "admin-1")
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "name {name:?}");
        }
        assert!(repo.get_all(&ListFilters::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_missing_after_write_is_consistency_error() {
        let repo = Repo::new(Arc::new(ForgetfulStore::default()));
        let err = repo
            .create(CreateCompany::named("Comilog"), "admin-1")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Consistency);
    }

    #[tokio::test]
    async fn test_find_by_name_exact_match_ignores_case_and_accents() {
        let repo = repo();
        let created = repo
            .create(CreateCompany::named("Société Générale"), "admin-1")
            .await
            .unwrap();

        let lookup = repo.find_by_name("  SOCIETE generale").await;
        assert_eq!(lookup.entity().map(|c| c.id.as_str()), Some(created.id.as_str()));
        assert!(lookup.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_suggestions_are_distinct_and_bounded() {
        let repo = repo();
        for name in [
            "Total Gabon",
            "Total Gabon",
            "Total Energies",
            "Total Marketing",
            "Total Lubrifiants",
            "Total Exploration",
            "Total Services",
            "Comilog",
        ] {
            repo.create(CreateCompany::named(name), "admin-1").await.unwrap();
        }

        let lookup = repo.find_by_name("Tot").await;
        assert!(!lookup.is_found());
        let suggestions = lookup.suggestions();
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Total Energies");
        let mut unique = suggestions.to_vec();
        unique.dedup();
        assert_eq!(unique.len(), suggestions.len());
        assert!(suggestions.iter().all(|s| s.starts_with("Total")));
    }

    #[tokio::test]
    async fn test_find_by_name_suggestions_look_past_duplicate_names() {
        let repo = repo();
        for _ in 0..SUGGESTION_BATCH_SIZE + 5 {
            repo.create(CreateCompany::named("Total Aaa"), "admin-1").await.unwrap();
        }
        for name in ["Total Bbb", "Total Ccc", "Total Ddd", "Total Eee", "Total Fff"] {
            repo.create(CreateCompany::named(name), "admin-1").await.unwrap();
        }

        let lookup = repo.find_by_name("Tot").await;
        assert_eq!(
            lookup.suggestions(),
            ["Total Aaa", "Total Bbb", "Total Ccc", "Total Ddd", "Total Eee"]
        );
    }

    #[tokio::test]
    async fn test_find_by_name_suggestions_stop_when_matches_run_out() {
        let repo = repo();
        for _ in 0..SUGGESTION_BATCH_SIZE {
            repo.create(CreateCompany::named("Total Aaa"), "admin-1").await.unwrap();
        }
        repo.create(CreateCompany::named("Total Bbb"), "admin-1").await.unwrap();
        repo.create(CreateCompany::named("Comilog"), "admin-1").await.unwrap();

        let lookup = repo.find_by_name("Tot").await;
        assert_eq!(lookup.suggestions(), ["Total Aaa", "Total Bbb"]);
    }

    #[tokio::test]
    async fn test_find_by_name_blank_input() {
        let repo = repo();
        seed(&repo, 3).await;
        assert_eq!(repo.find_by_name("  ?! ").await, NameLookup::none());
    }

    #[tokio::test]
    async fn test_get_all_orders_by_search_or_recency() {
        let repo = repo();
        for name in ["Beta", "alpha", "Gamma"] {
            repo.create(CreateCompany::named(name), "admin-1").await.unwrap();
        }

        let recent: Vec<_> = repo
            .get_all(&ListFilters::default())
            .await
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(recent, vec!["Gamma", "alpha", "Beta"]);

        let searched = repo.get_all(&ListFilters::search("ALP")).await;
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].name, "alpha");

        let punctuation_only = repo.get_all(&ListFilters::search("--")).await;
        assert_eq!(punctuation_only.len(), 3);
    }

    #[tokio::test]
    async fn test_first_page_with_exactly_one_page_of_records() {
        let repo = repo();
        seed(&repo, 10).await;

        let page = repo
            .get_paginated(&ListFilters::default(), PageRequest::new(1, 10))
            .await;
        assert_eq!(page.len(), 10);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);
        assert_eq!(page.pagination.total_items, 10);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_first_page_detects_next_page() {
        let repo = repo();
        seed(&repo, 11).await;

        let page = repo
            .get_paginated(&ListFilters::default(), PageRequest::new(1, 10))
            .await;
        assert_eq!(page.len(), 10);
        assert!(page.pagination.has_next_page);
        assert_eq!(page.pagination.total_items, 11);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(!page.pagination.total_items_estimated);
        assert_eq!(page.data[0].name, "Company 10");
    }

    #[tokio::test]
    async fn test_walking_forward_uses_cursors() {
        let repo = repo();
        seed(&repo, 25).await;
        let filters = ListFilters::default();

        let first = repo.get_paginated(&filters, PageRequest::new(1, 10)).await;
        let second = repo.get_paginated(&filters, PageRequest::new(2, 10)).await;
        let third = repo.get_paginated(&filters, PageRequest::new(3, 10)).await;

        assert_eq!(second.pagination.current_page, 2);
        assert!(second.pagination.has_prev_page);
        assert!(second.pagination.has_next_page);
        assert_eq!(third.pagination.current_page, 3);
        assert_eq!(third.len(), 5);
        assert!(!third.pagination.has_next_page);

        let mut names: Vec<_> = [first, second, third]
            .into_iter()
            .flat_map(|p| p.data)
            .map(|c| c.name)
            .collect();
        assert_eq!(names.len(), 25);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[tokio::test]
    async fn test_cold_cache_serves_first_page() {
        let repo = repo();
        seed(&repo, 15).await;

        let page = repo
            .get_paginated(&ListFilters::default(), PageRequest::new(2, 10))
            .await;
        assert_eq!(page.pagination.current_page, 1);
        assert!(!page.pagination.has_prev_page);
        assert_eq!(page.len(), 10);
        assert_eq!(page.data[0].name, "Company 14");
    }

    #[tokio::test]
    async fn test_cursors_are_scoped_by_search() {
        let repo = repo();
        seed(&repo, 12).await;

        repo.get_paginated(&ListFilters::default(), PageRequest::new(1, 5))
            .await;
        let page = repo
            .get_paginated(&ListFilters::search("company"), PageRequest::new(2, 5))
            .await;
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.data[0].name, "Company 00");
    }

    #[tokio::test]
    async fn test_search_pagination_is_name_ordered() {
        let repo = repo();
        seed(&repo, 7).await;
        let filters = ListFilters::search("Comp");

        let first = repo.get_paginated(&filters, PageRequest::new(1, 3)).await;
        let second = repo.get_paginated(&filters, PageRequest::new(2, 3)).await;
        let names: Vec<_> = first.data.iter().chain(&second.data).map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Company 00", "Company 01", "Company 02", "Company 03", "Company 04", "Company 05"]
        );
        assert_eq!(second.pagination.total_items, 7);
    }

    #[tokio::test]
    async fn test_writes_invalidate_cursors() {
        let repo = repo();
        let seeded = seed(&repo, 12).await;
        let filters = ListFilters::default();

        repo.get_paginated(&filters, PageRequest::new(1, 5)).await;
        assert!(!repo.cursors().is_empty());

        repo.delete(&seeded[0].id).await.unwrap();
        assert!(repo.cursors().is_empty());

        repo.get_paginated(&filters, PageRequest::new(1, 5)).await;
        repo.update(&seeded[1].id, UpdateCompany::default()).await.unwrap();
        assert!(repo.cursors().is_empty());

        repo.get_paginated(&filters, PageRequest::new(1, 5)).await;
        repo.create(CreateCompany::named("Fresh"), "admin-1").await.unwrap();
        assert!(repo.cursors().is_empty());
    }

    #[tokio::test]
    async fn test_stale_cursor_restarts_at_first_page() {
        let store = MemoryDocumentStore::default();
        let repo = repo_over(store.clone());
        seed(&repo, 12).await;
        let filters = ListFilters::default();

        let first = repo.get_paginated(&filters, PageRequest::new(1, 5)).await;
        let cursor_id = first.data[4].id.clone();
        // Delete behind the repository's back so the cursor survives.
        store.delete_doc(Company::COLLECTION, &cursor_id).await.unwrap();

        let page = repo.get_paginated(&filters, PageRequest::new(2, 5)).await;
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.data[0].id, first.data[0].id);
    }

    #[tokio::test]
    async fn test_total_is_estimated_without_count() {
        let repo = repo_over(MemoryDocumentStore::new(false));
        seed(&repo, 25).await;
        let filters = ListFilters::default();

        let first = repo.get_paginated(&filters, PageRequest::new(1, 10)).await;
        assert!(first.pagination.total_items_estimated);
        assert_eq!(first.pagination.total_items, 11);
        assert_eq!(first.pagination.total_pages, 2);

        repo.get_paginated(&filters, PageRequest::new(2, 10)).await;
        let third = repo.get_paginated(&filters, PageRequest::new(3, 10)).await;
        assert_eq!(third.pagination.total_items, 25);
        assert_eq!(third.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn test_update_recomputes_normalized_name() {
        let repo = repo();
        let created = repo
            .create(CreateCompany::named("Old Name"), "admin-1")
            .await
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                UpdateCompany {
                    name: Some("New".to_string()),
                    ..UpdateCompany::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(updated.normalized_name, normalize_name("New"));
        assert_eq!(updated.created_by, "admin-1");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert!(repo.find_by_name("new").await.is_found());
        assert!(!repo.find_by_name("old name").await.is_found());
    }

    #[tokio::test]
    async fn test_update_without_name_keeps_key() {
        let repo = repo();
        let created = repo
            .create(CreateCompany::named("Comilog"), "admin-1")
            .await
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                UpdateCompany {
                    employee_count: Some(1200),
                    ..UpdateCompany::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Comilog");
        assert_eq!(updated.normalized_name, "comilog");
        assert_eq!(updated.employee_count, Some(1200));
    }

    #[tokio::test]
    async fn test_update_errors_are_returned() {
        let repo = repo();
        let missing = repo.update("missing", UpdateCompany::default()).await;
        assert_eq!(missing.unwrap_err().kind, ErrorKind::NotFound);

        let created = repo
            .create(CreateCompany::named("Comilog"), "admin-1")
            .await
            .unwrap();
        let blank = repo
            .update(
                &created.id,
                UpdateCompany {
                    name: Some("  ".to_string()),
                    ..UpdateCompany::default()
                },
            )
            .await;
        assert_eq!(blank.unwrap_err().kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let repo = repo();
        let created = repo
            .create(CreateCompany::named("Comilog"), "admin-1")
            .await
            .unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(repo.get_by_id(&created.id).await.is_none());
        assert!(repo.delete(&created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_or_create() {
        let repo = repo();
        let first = repo
            .find_or_create(
                "Total Gabon",
                "admin-1",
                Some(CreateCompany {
                    industry: Some("Energy".to_string()),
                    ..CreateCompany::named("ignored")
                }),
            )
            .await
            .unwrap();
        assert!(first.is_new);

        let created = repo.get_by_id(&first.id).await.unwrap();
        assert_eq!(created.name, "Total Gabon");
        assert_eq!(created.industry.as_deref(), Some("Energy"));

        let second = repo.find_or_create("TOTAL gabon", "admin-2", None).await.unwrap();
        assert!(!second.is_new);
        assert_eq!(second.id, first.id);
    }

    #[tokio::test]
    async fn test_failing_store_soft_fails_reads_and_surfaces_writes() {
        let repo = Repo::new(Arc::new(UnavailableStore));

        assert_eq!(repo.find_by_name("Total").await, NameLookup::none());
        assert!(repo.get_by_id("any").await.is_none());
        assert!(repo.get_all(&ListFilters::default()).await.is_empty());

        let page = repo
            .get_paginated(&ListFilters::default(), PageRequest::new(3, 20))
            .await;
        assert!(page.is_empty());
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.page_size, 20);
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
        assert!(!page.pagination.has_prev_page);

        assert!(repo.create(CreateCompany::named("A"), "admin-1").await.is_err());
        assert!(repo.update("x", UpdateCompany::default()).await.is_err());
        assert!(repo.delete("x").await.is_err());
        assert!(repo.find_or_create("A", "admin-1", None).await.is_err());
    }
}
