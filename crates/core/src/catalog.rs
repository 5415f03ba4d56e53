//! Catalog item model and the read-only catalog seam.
//!
//! Catalog items are transient: they live in a client's search-result cache
//! and are never persisted as-is. Only the fields needed for a
//! [`WatchlistEntry`](crate::entry::WatchlistEntry) are copied out when the
//! user adds one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entry::AddEntryInput;
use crate::error::CoreError;
use crate::status::WatchStatus;
use crate::types::ExternalId;

/// A title as reported by the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub external_id: ExternalId,
    pub title: String,
    /// Empty when the catalog has no usable image for the title.
    pub image_url: String,
    pub synopsis: Option<String>,
    pub score: Option<f64>,
    pub rank: Option<i64>,
    pub popularity: Option<i64>,
    pub episodes: Option<i32>,
    /// Media type, e.g. "TV" or "Movie".
    pub kind: Option<String>,
    /// Catalog airing status, e.g. "Finished Airing".
    pub airing_status: Option<String>,
}

impl CatalogItem {
    /// Build the add-entry input for this item with the chosen target status.
    pub fn to_add_input(&self, status: WatchStatus) -> AddEntryInput {
        AddEntryInput {
            external_id: Some(self.external_id),
            title: Some(self.title.clone()),
            image_url: Some(self.image_url.clone()),
            status: Some(status.as_str().to_string()),
        }
    }
}

/// Read-only lookup against the external catalog.
///
/// Implementations map transport failures and timeouts to
/// [`CoreError::ServiceUnavailable`] and unknown identifiers on
/// [`get_details`](CatalogClient::get_details) to [`CoreError::NotFound`].
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search by free-text title; an empty vector means no matches.
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CoreError>;

    /// Fetch the full item for a known identifier.
    async fn get_details(&self, external_id: ExternalId) -> Result<CatalogItem, CoreError>;
}
