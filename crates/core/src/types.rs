/// Watchlist entry primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Catalog identifiers are plain integers assigned by the catalog.
pub type ExternalId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
