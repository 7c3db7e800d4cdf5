//! Tag model and DTOs.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tag row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: DbId,
    pub nom: String,
    pub created_at: Timestamp,
}

/// DTO for attaching a tag to a project. The tag is created on first use.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachTag {
    pub nom: String,
}
