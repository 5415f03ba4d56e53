//! Watchlist entry model, add-entry input schema and its validation.
//!
//! [`AddEntryInput`] is the raw, untrusted shape of an add request.
//! [`AddEntryInput::into_new_entry`] is the single validation step: it
//! either yields a fully-typed [`NewEntry`] or a [`CoreError::Validation`]
//! listing every problem, before any storage is touched.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::status::WatchStatus;
use crate::types::{DbId, ExternalId, Timestamp};

/// A persisted watchlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: DbId,
    pub external_id: ExternalId,
    pub title: String,
    pub image_url: String,
    pub status: WatchStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Untrusted input for creating an entry.
///
/// Every field is optional at the type level so that missing fields surface
/// as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddEntryInput {
    #[serde(alias = "mal_id")]
    #[validate(
        required(message = "externalId is required"),
        range(min = 1, message = "externalId must be a positive integer")
    )]
    pub external_id: Option<ExternalId>,

    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    #[serde(alias = "image_url")]
    #[validate(
        required(message = "imageUrl is required"),
        url(message = "imageUrl must be a valid URL")
    )]
    pub image_url: Option<String>,

    /// Defaults to `planned` if omitted.
    pub status: Option<String>,
}

/// A validated entry ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub external_id: ExternalId,
    pub title: String,
    pub image_url: String,
    pub status: WatchStatus,
}

impl AddEntryInput {
    /// Validate the input and convert it into a [`NewEntry`].
    ///
    /// All problems are reported together, joined with `"; "`.
    pub fn into_new_entry(self) -> Result<NewEntry, CoreError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => describe_errors(&e),
        };

        if let Some(title) = &self.title {
            if !title.is_empty() && title.trim().is_empty() {
                errors.push("title must not be blank".to_string());
            }
        }

        let status = match self.status.as_deref() {
            None => WatchStatus::default(),
            Some(s) => match WatchStatus::from_str_value(s) {
                Ok(status) => status,
                Err(msg) => {
                    errors.push(msg);
                    WatchStatus::default()
                }
            },
        };

        match (errors.is_empty(), self.external_id, self.title, self.image_url) {
            (true, Some(external_id), Some(title), Some(image_url)) => Ok(NewEntry {
                external_id,
                title,
                image_url,
                status,
            }),
            _ => Err(CoreError::Validation(errors.join("; "))),
        }
    }
}

/// Flatten validator errors into messages, ordered by field name.
fn describe_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect()
}
