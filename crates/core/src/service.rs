//! Watchlist service: the sole authority for reading and mutating entries.
//!
//! Every invariant on [`WatchlistEntry`] is enforced here:
//!
//! - input is validated by [`AddEntryInput::into_new_entry`] before any
//!   storage access,
//! - `external_id` uniqueness is checked with a find-then-insert, and a
//!   uniqueness violation raised by the store on insert (concurrent writer)
//!   is reported as the same [`CoreError::Conflict`],
//! - status strings are parsed before any lookup, so an invalid status never
//!   has a side effect.
//!
//! Each store call is bounded by `store_timeout`; expiry surfaces as
//! [`CoreError::ServiceUnavailable`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::entry::{AddEntryInput, WatchlistEntry};
use crate::error::CoreError;
use crate::status::WatchStatus;
use crate::store::{StoreError, WatchlistStore};
use crate::types::DbId;

const ENTITY: &str = "WatchlistEntry";

/// Default bound applied to every store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct WatchlistService {
    store: Arc<dyn WatchlistStore>,
    store_timeout: Duration,
}

impl WatchlistService {
    pub fn new(store: Arc<dyn WatchlistStore>) -> Self {
        Self {
            store,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// List entries, optionally filtered by status, sorted by title ascending.
    pub async fn list_entries(
        &self,
        status: Option<WatchStatus>,
    ) -> Result<Vec<WatchlistEntry>, CoreError> {
        let mut entries = self.bounded("list", self.store.list(status)).await?;
        entries.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(entries)
    }

    pub async fn get_entry(&self, id: DbId) -> Result<WatchlistEntry, CoreError> {
        self.bounded("find_by_id", self.store.find_by_id(id))
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Validate and persist a new entry. Status defaults to `planned`.
    pub async fn add_entry(&self, input: AddEntryInput) -> Result<WatchlistEntry, CoreError> {
        let new_entry = input.into_new_entry()?;

        let existing = self
            .bounded(
                "find_by_external_id",
                self.store.find_by_external_id(new_entry.external_id),
            )
            .await?;
        if existing.is_some() {
            return Err(StoreError::Duplicate {
                external_id: new_entry.external_id,
            }
            .into());
        }

        let entry = self.bounded("insert", self.store.insert(&new_entry)).await?;
        tracing::info!(
            id = entry.id,
            external_id = entry.external_id,
            status = %entry.status,
            "Watchlist entry added"
        );
        Ok(entry)
    }

    /// Change the status of an entry. Any status may follow any other.
    pub async fn update_status(&self, id: DbId, status: &str) -> Result<WatchlistEntry, CoreError> {
        let status = WatchStatus::from_str_value(status).map_err(CoreError::Validation)?;

        let entry = self
            .bounded("update_status", self.store.update_status(id, status))
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(id, status = %entry.status, "Watchlist entry status updated");
        Ok(entry)
    }

    /// Permanently remove an entry. Deleting an absent id is `NotFound`.
    pub async fn delete_entry(&self, id: DbId) -> Result<(), CoreError> {
        if self.bounded("delete", self.store.delete(id)).await? {
            tracing::info!(id, "Watchlist entry deleted");
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: ENTITY, id })
        }
    }

    /// Whether the backing store answers within the timeout.
    pub async fn store_healthy(&self) -> bool {
        self.bounded("health_check", self.store.health_check())
            .await
            .is_ok()
    }

    async fn bounded<T>(
        &self,
        op: &'static str,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, CoreError> {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result.map_err(|e| {
                if let StoreError::Unavailable(msg) = &e {
                    tracing::error!(op, error = %msg, "Watchlist store failure");
                }
                e.into()
            }),
            Err(_) => {
                tracing::error!(op, timeout = ?self.store_timeout, "Watchlist store timed out");
                Err(CoreError::ServiceUnavailable(format!(
                    "Watchlist store did not answer {op} within {:?}",
                    self.store_timeout
                )))
            }
        }
    }
}
