//! Watch status of a watchlist entry.
//!
//! The status set is closed: nothing outside [`VALID_STATUSES`] may ever be
//! persisted. Transitions are unrestricted, so any status may follow any
//! other (including itself).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_WATCHING: &str = "watching";
pub const STATUS_PLANNED: &str = "planned";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid status strings, in tab display order.
pub const VALID_STATUSES: &[&str] = &[STATUS_WATCHING, STATUS_PLANNED, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Watching,
    #[default]
    Planned,
    Completed,
}

impl WatchStatus {
    /// Every status, in the same order as [`VALID_STATUSES`].
    pub const ALL: [WatchStatus; 3] = [Self::Watching, Self::Planned, Self::Completed];

    /// Convert from a database / wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_WATCHING => Ok(Self::Watching),
            STATUS_PLANNED => Ok(Self::Planned),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database / wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watching => STATUS_WATCHING,
            Self::Planned => STATUS_PLANNED,
            Self::Completed => STATUS_COMPLETED,
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
