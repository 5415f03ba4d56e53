//! Client-side state controller for the watchlist.
//!
//! The presentation layer holds a [`ClientState`] snapshot, turns user input
//! into an [`Action`], and hands both to [`Controller::dispatch`], which
//! returns the next snapshot. Rendering reads snapshots through the pure
//! projections in [`view`].

pub mod action;
pub mod api;
pub mod controller;
pub mod partition;
pub mod state;
pub mod view;

pub use action::Action;
pub use api::{HttpApiError, HttpWatchlistApi, WatchlistApi};
pub use controller::Controller;
pub use partition::Partition;
pub use state::{ClientState, Notice, NoticeKind};
