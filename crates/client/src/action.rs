use watchlist_core::status::WatchStatus;
use watchlist_core::types::{DbId, ExternalId};

/// A user intent handed to [`Controller::dispatch`](crate::Controller::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Initial load of the watchlist.
    Load,
    Refresh,
    Search(String),
    /// Drop the current search results ("back to main").
    ClearSearch,
    SelectTab(WatchStatus),
    /// Add a catalog item from the current search results.
    Add {
        external_id: ExternalId,
        status: WatchStatus,
    },
    /// Change an entry's status. Kept as the raw selected value; the
    /// service validates it.
    UpdateStatus { id: DbId, status: String },
    RequestDelete(DbId),
    CancelDelete,
    ConfirmDelete,
    ShowDetails(ExternalId),
    CloseDetails,
    DismissNotice,
}
