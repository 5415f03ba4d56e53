//! Repository for the `watchlist_entries` table.

use sqlx::PgPool;
use watchlist_core::entry::NewEntry;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::{DbId, ExternalId};

use crate::models::watchlist_entry::WatchlistEntryRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_id, title, image_url, status, created_at, updated_at";

/// Name of the unique index on `external_id`.
pub const UQ_EXTERNAL_ID: &str = "uq_watchlist_entries_external_id";

/// Provides CRUD operations for watchlist entries.
pub struct WatchlistEntryRepo;

impl WatchlistEntryRepo {
    /// Insert a new entry, returning the created row.
    ///
    /// A duplicate `external_id` fails with a unique violation on
    /// [`UQ_EXTERNAL_ID`].
    pub async fn create(
        pool: &PgPool,
        input: &NewEntry,
    ) -> Result<WatchlistEntryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO watchlist_entries (external_id, title, image_url, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntryRow>(&query)
            .bind(input.external_id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WatchlistEntryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM watchlist_entries WHERE id = $1");
        sqlx::query_as::<_, WatchlistEntryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an entry by its catalog identifier.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: ExternalId,
    ) -> Result<Option<WatchlistEntryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM watchlist_entries WHERE external_id = $1");
        sqlx::query_as::<_, WatchlistEntryRow>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// List entries ordered by title (byte order), optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<WatchStatus>,
    ) -> Result<Vec<WatchlistEntryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM watchlist_entries
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY title COLLATE \"C\", id"
        );
        sqlx::query_as::<_, WatchlistEntryRow>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(pool)
            .await
    }

    /// Set the status of an entry.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: WatchStatus,
    ) -> Result<Option<WatchlistEntryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE watchlist_entries SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntryRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watchlist_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
