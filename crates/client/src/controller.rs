//! Action dispatcher producing the next [`ClientState`] snapshot.
//!
//! Each action makes at most one domain call plus one refresh of the full
//! watchlist. Failures are never retried; they become an error notice on an
//! otherwise unchanged snapshot.

use std::sync::Arc;

use watchlist_core::catalog::CatalogClient;
use watchlist_core::error::CoreError;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::{DbId, ExternalId};

use crate::action::Action;
use crate::api::WatchlistApi;
use crate::partition::Partition;
use crate::state::{ClientState, Notice};

pub const ADDED_MESSAGE: &str = "Anime added to your watchlist!";
pub const DETAILS_FAILED_MESSAGE: &str = "Failed to load anime details";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete anime";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load your watchlist";

pub struct Controller {
    watchlist: Arc<dyn WatchlistApi>,
    catalog: Arc<dyn CatalogClient>,
}

impl Controller {
    pub fn new(watchlist: Arc<dyn WatchlistApi>, catalog: Arc<dyn CatalogClient>) -> Self {
        Self { watchlist, catalog }
    }

    /// Apply `action` to `state` and return the resulting snapshot.
    pub async fn dispatch(&self, state: &ClientState, action: Action) -> ClientState {
        tracing::debug!(?action, "Dispatching client action");
        match action {
            Action::Load | Action::Refresh => match self.load().await {
                Ok(watchlist) => ClientState {
                    watchlist,
                    ..state.clone()
                },
                Err(_) => state.with_error(LOAD_FAILED_MESSAGE),
            },
            Action::Search(query) => self.search(state, &query).await,
            Action::ClearSearch => ClientState {
                search_results: Vec::new(),
                searched: false,
                ..state.clone()
            },
            Action::SelectTab(tab) => ClientState {
                active_tab: tab,
                ..state.clone()
            },
            Action::Add {
                external_id,
                status,
            } => self.add(state, external_id, status).await,
            Action::UpdateStatus { id, status } => self.update_status(state, id, &status).await,
            Action::RequestDelete(id) => ClientState {
                pending_delete: Some(id),
                ..state.clone()
            },
            Action::CancelDelete => ClientState {
                pending_delete: None,
                ..state.clone()
            },
            Action::ConfirmDelete => self.confirm_delete(state).await,
            Action::ShowDetails(external_id) => self.show_details(state, external_id).await,
            Action::CloseDetails => ClientState {
                details: None,
                ..state.clone()
            },
            Action::DismissNotice => ClientState {
                notice: None,
                ..state.clone()
            },
        }
    }

    async fn load(&self) -> Result<Partition, CoreError> {
        match self.watchlist.list(None).await {
            Ok(entries) => Ok(Partition::from_entries(entries)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load watchlist");
                Err(e)
            }
        }
    }

    async fn search(&self, state: &ClientState, query: &str) -> ClientState {
        let query = query.trim();
        if query.is_empty() {
            return state.clone();
        }

        match self.catalog.search(query).await {
            Ok(items) => ClientState {
                search_results: items,
                searched: true,
                ..state.clone()
            },
            Err(e) => {
                tracing::warn!(query, error = %e, "Catalog search failed");
                state.with_error(user_message(&e))
            }
        }
    }

    async fn add(
        &self,
        state: &ClientState,
        external_id: ExternalId,
        status: WatchStatus,
    ) -> ClientState {
        let Some(item) = state
            .search_results
            .iter()
            .find(|item| item.external_id == external_id)
        else {
            tracing::debug!(external_id, "Add ignored: item not in search results");
            return state.clone();
        };

        if let Err(e) = self.watchlist.add(item.to_add_input(status)).await {
            tracing::warn!(external_id, error = %e, "Failed to add to watchlist");
            return state.with_error(user_message(&e));
        }

        match self.load().await {
            Ok(watchlist) => ClientState {
                watchlist,
                notice: Some(Notice::info(ADDED_MESSAGE)),
                ..state.clone()
            },
            Err(_) => state.with_error(LOAD_FAILED_MESSAGE),
        }
    }

    async fn update_status(&self, state: &ClientState, id: DbId, status: &str) -> ClientState {
        if let Err(e) = self.watchlist.update_status(id, status).await {
            tracing::warn!(id, status, error = %e, "Failed to update status");
            return state.with_error(user_message(&e));
        }

        match self.load().await {
            Ok(watchlist) => ClientState {
                watchlist,
                ..state.clone()
            },
            Err(_) => state.with_error(LOAD_FAILED_MESSAGE),
        }
    }

    async fn confirm_delete(&self, state: &ClientState) -> ClientState {
        let Some(id) = state.pending_delete else {
            return state.clone();
        };

        if let Err(e) = self.watchlist.delete(id).await {
            tracing::warn!(id, error = %e, "Failed to delete entry");
            return state.with_error(DELETE_FAILED_MESSAGE);
        }

        match self.load().await {
            Ok(watchlist) => ClientState {
                watchlist,
                pending_delete: None,
                ..state.clone()
            },
            Err(_) => ClientState {
                pending_delete: None,
                ..state.with_error(LOAD_FAILED_MESSAGE)
            },
        }
    }

    async fn show_details(&self, state: &ClientState, external_id: ExternalId) -> ClientState {
        match self.catalog.get_details(external_id).await {
            Ok(item) => ClientState {
                details: Some(item),
                ..state.clone()
            },
            Err(e) => {
                tracing::warn!(external_id, error = %e, "Failed to load details");
                state.with_error(DETAILS_FAILED_MESSAGE)
            }
        }
    }
}

/// Message shown to the user for a failed call.
fn user_message(err: &CoreError) -> String {
    match err {
        CoreError::Validation(msg) | CoreError::Conflict(msg) => msg.clone(),
        CoreError::NotFound { .. } => "This anime is no longer in your watchlist".to_string(),
        CoreError::ServiceUnavailable(_) => {
            "Service is temporarily unavailable. Please try again later.".to_string()
        }
        CoreError::Internal(_) => "Something went wrong. Please try again.".to_string(),
    }
}
