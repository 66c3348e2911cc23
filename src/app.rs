//! Wiring of the store, repositories, and services.

use std::sync::Arc;

use tracing::info;

use memberhub_core::config::AppConfig;
use memberhub_core::error::AppError;
use memberhub_database::connection::DocumentDatabase;
use memberhub_database::repositories::{CompanyRepository, ProfessionRepository};
use memberhub_service::{CompanyService, ProfessionService};

/// Everything a command needs, built from configuration.
#[derive(Debug)]
pub struct AppContext {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Open document store.
    pub database: DocumentDatabase,
    /// Company service.
    pub companies: CompanyService,
    /// Profession service.
    pub professions: ProfessionService,
}

impl AppContext {
    /// Open the store and build the services on top of it.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let database = DocumentDatabase::connect(&config.database).await?;
        if !database.health_check().await? {
            return Err(AppError::service_unavailable(
                "Document store failed its health check",
            ));
        }

        let store = database.store();
        let companies = CompanyService::new(Arc::new(CompanyRepository::new(store.clone())));
        let professions = ProfessionService::new(Arc::new(ProfessionRepository::new(store)));

        info!("MemberHub v{} ready", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            config,
            database,
            companies,
            professions,
        })
    }

    /// Persist the store and release it.
    pub async fn shutdown(self) -> Result<(), AppError> {
        self.database.close().await
    }
}
