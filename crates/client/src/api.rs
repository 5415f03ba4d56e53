//! The seam between the client controller and the watchlist service.
//!
//! [`HttpWatchlistApi`] talks to the REST surface served by `watchlist-api`
//! and maps error responses back onto [`CoreError`]. [`WatchlistService`]
//! implements the trait directly for in-process use.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use watchlist_core::entry::{AddEntryInput, WatchlistEntry};
use watchlist_core::error::CoreError;
use watchlist_core::service::WatchlistService;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::DbId;

const ENTITY: &str = "WatchlistEntry";

#[async_trait]
pub trait WatchlistApi: Send + Sync {
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, CoreError>;

    async fn add(&self, input: AddEntryInput) -> Result<WatchlistEntry, CoreError>;

    async fn update_status(&self, id: DbId, status: &str) -> Result<WatchlistEntry, CoreError>;

    async fn delete(&self, id: DbId) -> Result<(), CoreError>;
}

#[async_trait]
impl WatchlistApi for WatchlistService {
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, CoreError> {
        self.list_entries(status).await
    }

    async fn add(&self, input: AddEntryInput) -> Result<WatchlistEntry, CoreError> {
        self.add_entry(input).await
    }

    async fn update_status(&self, id: DbId, status: &str) -> Result<WatchlistEntry, CoreError> {
        WatchlistService::update_status(self, id, status).await
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.delete_entry(id).await
    }
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// Errors from the watchlist REST layer.
#[derive(Debug, thiserror::Error)]
pub enum HttpApiError {
    /// The HTTP request itself failed (network, DNS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error body.
    #[error("Watchlist API error ({status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

impl HttpApiError {
    fn into_core(self, id: Option<DbId>) -> CoreError {
        match self {
            HttpApiError::Api {
                status: 400,
                code,
                message,
            } => {
                if code == "CONFLICT" {
                    CoreError::Conflict(message)
                } else {
                    CoreError::Validation(message)
                }
            }
            HttpApiError::Api {
                status: 404,
                message,
                ..
            } => match id {
                Some(id) => CoreError::NotFound { entity: ENTITY, id },
                None => CoreError::Internal(format!("Watchlist route missing: {message}")),
            },
            HttpApiError::Api {
                status, message, ..
            } if status < 500 => {
                CoreError::Internal(format!("Unexpected response ({status}): {message}"))
            }
            other => CoreError::ServiceUnavailable(other.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

#[derive(Serialize)]
struct UpdateStatusBody<'a> {
    status: &'a str,
}

/// REST client for the watchlist server.
pub struct HttpWatchlistApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWatchlistApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/watchlist{}", self.base_url, path)
    }

    async fn fetch_list(
        &self,
        status: Option<WatchStatus>,
    ) -> Result<Vec<WatchlistEntry>, HttpApiError> {
        let mut request = self.client.get(self.url(""));
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        Self::parse_response(request.send().await?).await
    }

    async fn post_entry(&self, input: &AddEntryInput) -> Result<WatchlistEntry, HttpApiError> {
        let response = self.client.post(self.url("")).json(input).send().await?;
        Self::parse_response(response).await
    }

    async fn patch_status(&self, id: DbId, status: &str) -> Result<WatchlistEntry, HttpApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/{id}")))
            .json(&UpdateStatusBody { status })
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_entry(&self, id: DbId) -> Result<(), HttpApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Return the response on success, otherwise decode the `{error, code}`
    /// body into [`HttpApiError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, HttpApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.code, body.error),
            Err(_) => (status_code_name(status), text),
        };
        Err(HttpApiError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, HttpApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

fn status_code_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

#[async_trait]
impl WatchlistApi for HttpWatchlistApi {
    async fn list(&self, status: Option<WatchStatus>) -> Result<Vec<WatchlistEntry>, CoreError> {
        self.fetch_list(status).await.map_err(|e| e.into_core(None))
    }

    async fn add(&self, input: AddEntryInput) -> Result<WatchlistEntry, CoreError> {
        self.post_entry(&input).await.map_err(|e| e.into_core(None))
    }

    async fn update_status(&self, id: DbId, status: &str) -> Result<WatchlistEntry, CoreError> {
        self.patch_status(id, status)
            .await
            .map_err(|e| e.into_core(Some(id)))
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.delete_entry(id).await.map_err(|e| e.into_core(Some(id)))
    }
}
