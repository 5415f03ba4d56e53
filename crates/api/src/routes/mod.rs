pub mod health;
pub mod watchlist;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /                    welcome text
/// /health              service and store health
/// /watchlist           list, create
/// /watchlist/{id}      get, update status, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::welcome))
        .merge(health::router())
        .nest("/watchlist", watchlist::router())
}
