use watchlist_core::catalog::CatalogItem;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::DbId;

use crate::partition::Partition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A user-visible message produced by the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// An immutable snapshot of everything the presentation layer renders.
///
/// Snapshots are never mutated after being handed out; the controller
/// clones the previous one and returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub active_tab: WatchStatus,
    /// Results of the current search session. Discarded on the next search.
    pub search_results: Vec<CatalogItem>,
    /// Set once a search has completed, so an empty result can be told
    /// apart from "no search yet".
    pub searched: bool,
    pub watchlist: Partition,
    /// Catalog item shown in the details view, if open.
    pub details: Option<CatalogItem>,
    /// Entry awaiting delete confirmation.
    pub pending_delete: Option<DbId>,
    pub notice: Option<Notice>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            active_tab: WatchStatus::Watching,
            search_results: Vec::new(),
            searched: false,
            watchlist: Partition::default(),
            details: None,
            pending_delete: None,
            notice: None,
        }
    }
}

impl ClientState {
    /// Whether the last completed search returned no items.
    pub fn last_search_empty(&self) -> bool {
        self.searched && self.search_results.is_empty()
    }

    /// Copy of this snapshot with an error notice and nothing else changed.
    pub(crate) fn with_error(&self, message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::error(message)),
            ..self.clone()
        }
    }
}
