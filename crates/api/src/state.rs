use watchlist_core::service::WatchlistService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; handlers reach the watchlist only through `service`.
#[derive(Clone)]
pub struct AppState {
    /// The watchlist domain service.
    pub service: WatchlistService,
}
