//! Watchlist domain layer.
//!
//! Holds the domain types, input validation, the persistence and catalog
//! seams, and the [`service::WatchlistService`] that enforces every
//! watchlist invariant. This crate has no database or HTTP dependencies;
//! adapters live in `watchlist-db` and `watchlist-catalog`.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod service;
pub mod status;
pub mod store;
pub mod types;
