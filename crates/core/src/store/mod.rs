//! Persistence seam for watchlist entries.
//!
//! A [`WatchlistStore`] is plain single-record CRUD. It holds no business
//! rules beyond the storage-level uniqueness of `external_id`, which it
//! reports as [`StoreError::Duplicate`]. Every other invariant is enforced
//! by [`WatchlistService`](crate::service::WatchlistService).

pub mod memory;

use async_trait::async_trait;

use crate::entry::{NewEntry, WatchlistEntry};
use crate::error::CoreError;
use crate::status::WatchStatus;
use crate::types::{DbId, ExternalId};

pub use memory::InMemoryStore;

/// Errors reported by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The insert would violate the unique `external_id` constraint.
    #[error("Entry with external id {external_id} already exists")]
    Duplicate { external_id: ExternalId },

    /// The backing storage failed or is unreachable.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { external_id } => CoreError::Conflict(format!(
                "Anime with externalId {external_id} is already in the watchlist"
            )),
            StoreError::Unavailable(msg) => CoreError::ServiceUnavailable(msg),
        }
    }
}

#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// All entries, optionally restricted to one status. Order is unspecified.
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<WatchlistEntry>, StoreError>;

    async fn find_by_external_id(
        &self,
        external_id: ExternalId,
    ) -> Result<Option<WatchlistEntry>, StoreError>;

    /// Insert a new entry, assigning its id and timestamps.
    async fn insert(&self, entry: &NewEntry) -> Result<WatchlistEntry, StoreError>;

    /// Set the status of an entry. Returns `None` if no row with `id` exists.
    async fn update_status(
        &self,
        id: DbId,
        status: WatchStatus,
    ) -> Result<Option<WatchlistEntry>, StoreError>;

    /// Permanently delete an entry. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Cheap liveness probe.
    async fn health_check(&self) -> Result<(), StoreError>;
}
