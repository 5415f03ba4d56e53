//! REST client for the external catalog.
//!
//! Wraps the catalog's search and detail endpoints using [`reqwest`]. Every
//! request shares one client configured with the catalog timeout, so a hung
//! catalog surfaces as [`CoreError::ServiceUnavailable`] rather than
//! blocking the caller.

use async_trait::async_trait;
use reqwest::StatusCode;
use watchlist_core::catalog::{CatalogClient, CatalogItem};
use watchlist_core::error::CoreError;
use watchlist_core::types::ExternalId;

use crate::config::CatalogConfig;
use crate::dto::{CatalogItemDto, Envelope};

/// HTTP client for the catalog service.
pub struct CatalogApi {
    client: reqwest::Client,
    search_url: String,
    item_url: String,
    page_size: usize,
}

/// Errors from the catalog REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog has no item with this identifier.
    #[error("Catalog item {0} not found")]
    NotFound(ExternalId),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<CatalogApiError> for CoreError {
    fn from(err: CatalogApiError) -> Self {
        match err {
            CatalogApiError::NotFound(id) => CoreError::NotFound {
                entity: "CatalogItem",
                id,
            },
            other => CoreError::ServiceUnavailable(other.to_string()),
        }
    }
}

impl CatalogApi {
    /// Create a client from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("anime-watchlist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &CatalogConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/');
        Self {
            client,
            search_url: join_url(base_url, &config.search_path),
            item_url: join_url(base_url, &config.item_path),
            page_size: config.page_size,
        }
    }

    /// Search the catalog by title.
    ///
    /// Sends `GET {search_path}?q={query}&limit={page_size}`. A blank query
    /// returns no items without contacting the catalog.
    pub async fn search_items(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(query, limit = self.page_size, "Searching catalog");
        let limit = self.page_size.to_string();
        let response = self
            .client
            .get(self.search_url.as_str())
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await?;

        let items: Envelope<Vec<CatalogItemDto>> = Self::parse_response(response).await?;
        Ok(items
            .into_inner()
            .into_iter()
            .take(self.page_size)
            .map(CatalogItem::from)
            .collect())
    }

    /// Fetch a single item by its catalog identifier.
    ///
    /// Sends `GET {item_path}/{external_id}`; a 404 maps to
    /// [`CatalogApiError::NotFound`].
    pub async fn item_details(
        &self,
        external_id: ExternalId,
    ) -> Result<CatalogItem, CatalogApiError> {
        tracing::debug!(external_id, "Fetching catalog item");
        let response = self
            .client
            .get(format!("{}/{}", self.item_url, external_id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogApiError::NotFound(external_id));
        }

        let item: Envelope<CatalogItemDto> = Self::parse_response(response).await?;
        Ok(item.into_inner().into())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// `base` + `path` with exactly one slash between them and none trailing.
fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[async_trait]
impl CatalogClient for CatalogApi {
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CoreError> {
        Ok(self.search_items(query).await?)
    }

    async fn get_details(&self, external_id: ExternalId) -> Result<CatalogItem, CoreError> {
        Ok(self.item_details(external_id).await?)
    }
}
