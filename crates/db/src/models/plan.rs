//! Plan and plan-version entity models and DTOs.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::fichier::Fichier;

/// A plan row from the `plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: DbId,
    pub id_projet: DbId,
    pub nom: String,
    pub niveau: Option<String>,
    pub zone: Option<String>,
    pub created_at: Timestamp,
}

/// A numbered snapshot of a plan, from the `plan_versions` table.
///
/// Version 1 is created in the same transaction as its plan.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanVersion {
    pub id: DbId,
    pub id_plan: DbId,
    pub numero: i32,
    pub date_version: Timestamp,
}

/// A plan with its versions and uploaded file records, as nested in the
/// project detail response.
#[derive(Debug, Clone, Serialize)]
pub struct PlanWithVersions {
    #[serde(flatten)]
    pub plan: Plan,
    pub versions: Vec<PlanVersion>,
    pub fichiers: Vec<Fichier>,
}

/// DTO for creating a new plan under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlan {
    pub nom: String,
    pub niveau: Option<String>,
    pub zone: Option<String>,
}
