//! Shared test helpers for integration tests.

use std::sync::Arc;

use memberhub_core::config::{AppConfig, DatabaseConfig};
use memberhub_database::connection::DocumentDatabase;
use memberhub_database::memory::MemoryDocumentStore;
use memberhub_database::repositories::{CompanyRepository, ProfessionRepository};
use memberhub_service::{CompanyService, ProfessionService};

/// Acting administrator used by the tests
pub const ADMIN: &str = "admin-1";

/// Test application context
pub struct TestApp {
    /// Open document store
    pub database: DocumentDatabase,
    /// Company service
    pub companies: CompanyService,
    /// Profession service
    pub professions: ProfessionService,
}

impl TestApp {
    /// Create an application over a fresh in-memory store
    pub fn new() -> Self {
        Self::over(DocumentDatabase::from_store(MemoryDocumentStore::default()))
    }

    /// Create an application whose store cannot count documents
    pub fn without_count() -> Self {
        Self::over(DocumentDatabase::from_store(MemoryDocumentStore::new(false)))
    }

    /// Create an application from a configuration, as the binary does
    pub async fn from_config(database: DatabaseConfig) -> Self {
        let config = AppConfig {
            database,
            ..AppConfig::default()
        };
        config.validate().expect("Invalid test config");
        let database = DocumentDatabase::connect(&config.database)
            .await
            .expect("Failed to open test store");
        Self::over(database)
    }

    fn over(database: DocumentDatabase) -> Self {
        let store = database.store();
        Self {
            companies: CompanyService::new(Arc::new(CompanyRepository::new(store.clone()))),
            professions: ProfessionService::new(Arc::new(ProfessionRepository::new(store))),
            database,
        }
    }
}
