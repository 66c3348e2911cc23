//! Document store connection management.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use memberhub_core::config::DatabaseConfig;
use memberhub_core::error::AppError;
use memberhub_core::traits::store::DocumentStore;

use crate::memory::MemoryDocumentStore;

/// Handle to the configured document store.
#[derive(Debug, Clone)]
pub struct DocumentDatabase {
    /// Backing in-process store.
    store: MemoryDocumentStore,
    /// Where the store is persisted on close, if anywhere.
    snapshot_path: Option<PathBuf>,
}

impl DocumentDatabase {
    /// Open the document store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            provider = %config.provider,
            snapshot = config.snapshot_path.as_deref().unwrap_or("none"),
            count_aggregation = config.count_aggregation,
            "Opening document store"
        );

        let snapshot_path = config.snapshot_path.as_ref().map(PathBuf::from);

        let store = match config.provider.as_str() {
            "memory" => match &snapshot_path {
                Some(path) => {
                    MemoryDocumentStore::load_snapshot(path, config.count_aggregation).await?
                }
                None => MemoryDocumentStore::new(config.count_aggregation),
            },
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown database provider: '{other}'"
                )));
            }
        };

        info!("Document store ready");
        Ok(Self {
            store,
            snapshot_path,
        })
    }

    /// Wrap an existing in-memory store without persistence.
    pub fn from_store(store: MemoryDocumentStore) -> Self {
        Self {
            store,
            snapshot_path: None,
        }
    }

    /// Shared handle used by repositories.
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::new(self.store.clone())
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.store.health_check().await
    }

    /// Flush the snapshot, if one is configured.
    pub async fn close(&self) -> Result<(), AppError> {
        if let Some(path) = &self.snapshot_path {
            self.store.save_snapshot(path).await?;
            info!(path = %path.display(), "Document store snapshot written");
        }
        info!("Document store closed");
        Ok(())
    }
}
