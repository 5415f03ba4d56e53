//! In-process [`WatchlistStore`] backed by a `BTreeMap`.
//!
//! Used by tests and by the API server when no `DATABASE_URL` is set.
//! Uniqueness of `external_id` is checked under the write lock, so it behaves
//! like the unique index on the PostgreSQL table.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, WatchlistStore};
use crate::entry::{NewEntry, WatchlistEntry};
use crate::status::WatchStatus;
use crate::types::{DbId, ExternalId};

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    entries: BTreeMap<DbId, WatchlistEntry>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl WatchlistStore for InMemoryStore {
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .values()
            .filter(|e| status.is_none() || status == Some(e.status))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<WatchlistEntry>, StoreError> {
        Ok(self.inner.read().await.entries.get(&id).cloned())
    }

    async fn find_by_external_id(
        &self,
        external_id: ExternalId,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .values()
            .find(|e| e.external_id == external_id)
            .cloned())
    }

    async fn insert(&self, entry: &NewEntry) -> Result<WatchlistEntry, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .entries
            .values()
            .any(|e| e.external_id == entry.external_id)
        {
            return Err(StoreError::Duplicate {
                external_id: entry.external_id,
            });
        }

        inner.last_id += 1;
        let now = chrono::Utc::now();
        let stored = WatchlistEntry {
            id: inner.last_id,
            external_id: entry.external_id,
            title: entry.title.clone(),
            image_url: entry.image_url.clone(),
            status: entry.status,
            created_at: now,
            updated_at: now,
        };
        inner.entries.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_status(
        &self,
        id: DbId,
        status: WatchStatus,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.entries.get_mut(&id).map(|entry| {
            entry.status = status;
            entry.updated_at = chrono::Utc::now();
            entry.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.entries.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
