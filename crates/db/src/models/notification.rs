//! Notification entity model and DTOs.
//!
//! Notification state is persisted per user: read/unread and deletion are
//! real mutations that survive a reload.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A notification row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub id_utilisateur: DbId,
    pub titre: String,
    pub message: String,
    /// One of `project`, `team`, `system`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub priorite: Option<String>,
    /// No foreign key: the linked project may have been deleted since.
    pub id_projet: Option<DbId>,
    pub auteur: Option<String>,
    pub lu: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a notification (internal, emitted on project events).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub id_utilisateur: DbId,
    pub titre: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priorite: Option<String>,
    pub id_projet: Option<DbId>,
    pub auteur: Option<String>,
}
