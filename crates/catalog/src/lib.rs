//! HTTP client for the external anime catalog.
//!
//! [`CatalogApi`] implements [`watchlist_core::catalog::CatalogClient`]
//! against a catalog exposing `GET /search?q=&limit=` and
//! `GET /items/{externalId}`.

pub mod api;
pub mod config;
pub mod dto;

pub use api::{CatalogApi, CatalogApiError};
pub use config::CatalogConfig;
