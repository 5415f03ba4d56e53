pub mod watchlist;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// GET / -- plain-text greeting.
pub async fn welcome() -> &'static str {
    "Welcome to the Anime Watchlist API"
}
