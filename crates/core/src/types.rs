//! Primitive type aliases shared across the workspace.

/// Database primary key. Every table uses PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// UTC timestamp, matching TIMESTAMPTZ columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
