//! In-memory document store implementation using dashmap.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use memberhub_core::error::{AppError, ErrorKind};
use memberhub_core::result::AppResult;
use memberhub_core::traits::store::DocumentStore;
use memberhub_core::types::document::{Document, DocumentWrite, FieldValue, StoredDocument};
use memberhub_core::types::query::Query;

use super::eval;

/// Serialized form of a whole store: collection → id → fields.
type Snapshot = BTreeMap<String, BTreeMap<String, Document>>;

/// In-process document store.
///
/// Clones share the same collections. Server timestamps are strictly
/// increasing, so ordering by creation time is stable even for writes
/// issued within the same microsecond.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    /// Collection name → documents keyed by id.
    collections: Arc<DashMap<String, BTreeMap<String, Document>>>,
    /// Last issued server timestamp, in microseconds since the epoch.
    last_timestamp_micros: Arc<AtomicI64>,
    /// Whether `count` answers or reports the aggregation as unavailable.
    count_aggregation: bool,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new(count_aggregation: bool) -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
            last_timestamp_micros: Arc::new(AtomicI64::new(0)),
            count_aggregation,
        }
    }

    /// Load a store from a JSON snapshot. A missing file yields an empty store.
    pub async fn load_snapshot(path: &Path, count_aggregation: bool) -> AppResult<Self> {
        let store = Self::new(count_aggregation);

        if !tokio::fs::try_exists(path).await? {
            info!(path = %path.display(), "No snapshot found, starting with an empty store");
            return Ok(store);
        }

        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to read snapshot '{}'", path.display()),
                e,
            )
        })?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        let mut loaded = 0usize;
        for (collection, docs) in snapshot {
            loaded += docs.len();
            store.collections.insert(collection, docs);
        }

        info!(path = %path.display(), documents = loaded, "Loaded store snapshot");
        Ok(store)
    }

    /// Write every collection to a JSON snapshot.
    pub async fn save_snapshot(&self, path: &Path) -> AppResult<()> {
        let snapshot: Snapshot = self
            .collections
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to write snapshot '{}'", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), "Saved store snapshot");
        Ok(())
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    /// Whether a collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Next server timestamp, strictly after every one issued before.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_micros();
        let previous = self
            .last_timestamp_micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        let issued = now.max(previous + 1);
        DateTime::<Utc>::from_timestamp_micros(issued).unwrap_or_else(Utc::now)
    }

    /// Resolve server timestamps and merge `write` into `target`.
    fn apply(&self, target: &mut Document, write: DocumentWrite) {
        let mut timestamp: Option<Value> = None;
        for (field, value) in write {
            let value = match value {
                FieldValue::Value(v) => v,
                FieldValue::ServerTimestamp => timestamp
                    .get_or_insert_with(|| {
                        Value::String(
                            self.next_timestamp()
                                .to_rfc3339_opts(SecondsFormat::Micros, true),
                        )
                    })
                    .clone(),
            };
            target.insert(field, value);
        }
    }

    fn snapshot_collection(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| StoredDocument::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_doc(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).cloned())
            .map(|fields| StoredDocument::new(id, fields)))
    }

    async fn get_docs(&self, query: &Query) -> AppResult<Vec<StoredDocument>> {
        let docs = self.snapshot_collection(&query.collection);
        Ok(eval::run(query, docs))
    }

    async fn add_doc(&self, collection: &str, write: DocumentWrite) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut fields = Document::new();
        self.apply(&mut fields, write);

        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);

        debug!(collection, id = %id, "Added document");
        Ok(id)
    }

    async fn update_doc(&self, collection: &str, id: &str, write: DocumentWrite) -> AppResult<()> {
        let mut docs = self.collections.get_mut(collection).ok_or_else(|| {
            AppError::not_found(format!("No document '{id}' in collection '{collection}'"))
        })?;
        let target = docs.get_mut(id).ok_or_else(|| {
            AppError::not_found(format!("No document '{id}' in collection '{collection}'"))
        })?;
        self.apply(target, write);

        debug!(collection, id, "Updated document");
        Ok(())
    }

    async fn delete_doc(&self, collection: &str, id: &str) -> AppResult<()> {
        let removed = self
            .collections
            .get_mut(collection)
            .and_then(|mut docs| docs.remove(id))
            .is_some();

        debug!(collection, id, removed, "Deleted document");
        Ok(())
    }

    async fn count(&self, query: &Query) -> AppResult<u64> {
        if !self.count_aggregation {
            return Err(AppError::not_implemented(
                "Count aggregation is disabled for this store",
            ));
        }
        let docs = self.snapshot_collection(&query.collection);
        Ok(eval::run(&query.unbounded(), docs).len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
