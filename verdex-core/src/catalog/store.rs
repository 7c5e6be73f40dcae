use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::ingest;
use crate::error::{CoreError, Result};
use verdex_model::{PlantId, PlantRecord};

/// In-memory catalog of record.
///
/// Readers take a cheap `Arc` snapshot; every mutation rebuilds the list and
/// swaps it whole, so a reader never observes a partially-applied change.
pub struct CatalogStore {
    items: RwLock<Arc<[PlantRecord]>>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore").finish_non_exhaustive()
    }
}

impl CatalogStore {
    /// Build a store from already-ingested records. Validates once at this
    /// boundary; duplicate identifiers are rejected here, not downstream.
    pub fn new(items: Vec<PlantRecord>) -> Result<Self> {
        let items = ingest::normalize(items)?;
        Ok(Self {
            items: RwLock::new(items.into()),
        })
    }

    pub fn empty() -> Self {
        Self {
            items: RwLock::new(Vec::new().into()),
        }
    }

    /// Immutable snapshot of the whole catalog.
    pub async fn snapshot(&self) -> Arc<[PlantRecord]> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn get(&self, id: PlantId) -> Option<PlantRecord> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Replace the entire catalog (refresh or admin bulk import).
    pub async fn replace_all(&self, items: Vec<PlantRecord>) -> Result<()> {
        let items = ingest::normalize(items)?;
        let count = items.len();
        *self.items.write().await = items.into();
        info!(count, "catalog replaced");
        Ok(())
    }

    pub async fn insert(&self, record: PlantRecord) -> Result<PlantRecord> {
        let mut guard = self.items.write().await;
        if guard.iter().any(|item| item.id == record.id) {
            return Err(CoreError::Invalid(format!(
                "duplicate identifier: {}",
                record.id
            )));
        }
        let record = ingest::normalize_record(record)?;
        let mut next: Vec<PlantRecord> = guard.to_vec();
        next.push(record.clone());
        *guard = next.into();
        info!(id = %record.id, "catalog entry created");
        Ok(record)
    }

    pub async fn update(&self, id: PlantId, mut record: PlantRecord) -> Result<PlantRecord> {
        record.id = id;
        let record = ingest::normalize_record(record)?;
        let mut guard = self.items.write().await;
        let Some(pos) = guard.iter().position(|item| item.id == id) else {
            return Err(CoreError::NotFound(format!("plant {id}")));
        };
        let mut next: Vec<PlantRecord> = guard.to_vec();
        next[pos] = record.clone();
        *guard = next.into();
        info!(id = %id, "catalog entry updated");
        Ok(record)
    }

    pub async fn remove(&self, id: PlantId) -> Result<PlantRecord> {
        let mut guard = self.items.write().await;
        let Some(pos) = guard.iter().position(|item| item.id == id) else {
            return Err(CoreError::NotFound(format!("plant {id}")));
        };
        let mut next: Vec<PlantRecord> = guard.to_vec();
        let removed = next.remove(pos);
        *guard = next.into();
        info!(id = %id, "catalog entry deleted");
        Ok(removed)
    }
}
