//! Uploaded file metadata model and DTOs.
//!
//! Only metadata rows are stored here; blob storage is outside this service.
//! A file with a NULL `id_plan` is a project-level annex document.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file row from the `fichiers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fichier {
    pub id: DbId,
    pub id_projet: DbId,
    pub id_plan: Option<DbId>,
    pub nom: String,
    #[sqlx(rename = "type_mime")]
    #[serde(rename = "type")]
    pub type_mime: Option<String>,
    /// Free-text size as reported by the uploader, e.g. `"123.45 KB"`.
    pub taille: Option<String>,
    pub uploaded_at: Timestamp,
}

/// DTO for registering an uploaded file.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub nom: String,
    #[serde(rename = "type")]
    pub type_mime: Option<String>,
    pub taille: Option<String>,
}
