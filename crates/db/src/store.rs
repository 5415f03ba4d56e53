//! [`WatchlistStore`] adapter over [`WatchlistEntryRepo`].
//!
//! Translates sqlx errors into [`StoreError`]: a unique violation on the
//! `external_id` index becomes [`StoreError::Duplicate`], everything else
//! becomes [`StoreError::Unavailable`].

use async_trait::async_trait;
use watchlist_core::entry::{NewEntry, WatchlistEntry};
use watchlist_core::status::WatchStatus;
use watchlist_core::store::{StoreError, WatchlistStore};
use watchlist_core::types::{DbId, ExternalId};

use crate::models::watchlist_entry::WatchlistEntryRow;
use crate::repositories::watchlist_entry_repo::{WatchlistEntryRepo, UQ_EXTERNAL_ID};
use crate::DbPool;

/// PostgreSQL unique_violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgWatchlistStore {
    pool: DbPool,
}

impl PgWatchlistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn unavailable(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Database error");
    StoreError::Unavailable(err.to_string())
}

fn is_external_id_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(UQ_EXTERNAL_ID)
        }
        _ => false,
    }
}

fn to_entry(row: WatchlistEntryRow) -> Result<WatchlistEntry, StoreError> {
    WatchlistEntry::try_from(row).map_err(|msg| {
        tracing::error!(error = %msg, "Corrupt watchlist row");
        StoreError::Unavailable(msg)
    })
}

#[async_trait]
impl WatchlistStore for PgWatchlistStore {
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, StoreError> {
        WatchlistEntryRepo::list(&self.pool, status)
            .await
            .map_err(unavailable)?
            .into_iter()
            .map(to_entry)
            .collect()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<WatchlistEntry>, StoreError> {
        WatchlistEntryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(unavailable)?
            .map(to_entry)
            .transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: ExternalId,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        WatchlistEntryRepo::find_by_external_id(&self.pool, external_id)
            .await
            .map_err(unavailable)?
            .map(to_entry)
            .transpose()
    }

    async fn insert(&self, entry: &NewEntry) -> Result<WatchlistEntry, StoreError> {
        match WatchlistEntryRepo::create(&self.pool, entry).await {
            Ok(row) => to_entry(row),
            Err(err) if is_external_id_violation(&err) => Err(StoreError::Duplicate {
                external_id: entry.external_id,
            }),
            Err(err) => Err(unavailable(err)),
        }
    }

    async fn update_status(
        &self,
        id: DbId,
        status: WatchStatus,
    ) -> Result<Option<WatchlistEntry>, StoreError> {
        WatchlistEntryRepo::update_status(&self.pool, id, status)
            .await
            .map_err(unavailable)?
            .map(to_entry)
            .transpose()
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        WatchlistEntryRepo::delete(&self.pool, id)
            .await
            .map_err(unavailable)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(unavailable)
    }
}
