//! Handlers for the `/watchlist` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use watchlist_core::entry::{AddEntryInput, WatchlistEntry};
use watchlist_core::status::WatchStatus;
use watchlist_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::StatusFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body of `PATCH /watchlist/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// GET /watchlist?status=
///
/// An empty `status` lists everything; a value outside the status set
/// matches no entry.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let filter = params.status.filter(|s| !s.is_empty());
    let entries = match filter.as_deref().map(WatchStatus::from_str_value) {
        None => state.service.list_entries(None).await?,
        Some(Ok(status)) => state.service.list_entries(Some(status)).await?,
        Some(Err(_)) => Vec::new(),
    };
    Ok(Json(entries))
}

/// GET /watchlist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<WatchlistEntry>> {
    let Path(id) = id?;
    let entry = state.service.get_entry(id).await?;
    Ok(Json(entry))
}

/// POST /watchlist
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<AddEntryInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<WatchlistEntry>)> {
    let Json(input) = input?;
    let entry = state.service.add_entry(input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /watchlist/{id}
pub async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<Json<WatchlistEntry>> {
    let Path(id) = id?;
    let Json(input) = input?;
    let entry = state
        .service
        .update_status(id, input.status.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(entry))
}

/// DELETE /watchlist/{id}
///
/// An id that is not a number cannot name an entry, so it is a 404 here
/// rather than the 400 the other `{id}` routes return.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(|_| AppError::NotFound("WatchlistEntry not found".into()))?;
    state.service.delete_entry(id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted successfully",
    }))
}
