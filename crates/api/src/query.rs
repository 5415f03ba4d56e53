//! Query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?status=` filter for the watchlist listing.
///
/// Kept as a raw string: an empty value means "no filter" and a value
/// outside the status set matches nothing.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilterParams {
    pub status: Option<String>,
}
