//! Watchlist entry row model.

use sqlx::FromRow;
use watchlist_core::entry::WatchlistEntry;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::{DbId, ExternalId, Timestamp};

/// A row from the `watchlist_entries` table.
///
/// `status` is stored as TEXT guarded by a CHECK constraint; it is parsed
/// into [`WatchStatus`] when converting to the domain type.
#[derive(Debug, Clone, FromRow)]
pub struct WatchlistEntryRow {
    pub id: DbId,
    pub external_id: ExternalId,
    pub title: String,
    pub image_url: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<WatchlistEntryRow> for WatchlistEntry {
    type Error = String;

    fn try_from(row: WatchlistEntryRow) -> Result<Self, Self::Error> {
        Ok(WatchlistEntry {
            status: WatchStatus::from_str_value(&row.status)?,
            id: row.id,
            external_id: row.external_id,
            title: row.title,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
