//! Project entity model and DTOs.

use chrono::NaiveDate;
use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::fichier::Fichier;
use crate::models::plan::PlanWithVersions;
use crate::models::statut::ProjectStatus;

/// A project row from the `projets` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub nom: String,
    pub client: Option<String>,
    pub reference_interne: Option<String>,
    pub typologie: Option<String>,
    pub adresse: Option<String>,
    pub date_livraison: Option<NaiveDate>,
    pub statut: ProjectStatus,
    pub id_auteur: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row augmented with list-view aggregates: plan count and the
/// comma-separated names of its tags.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: DbId,
    pub nom: String,
    pub client: Option<String>,
    pub reference_interne: Option<String>,
    pub typologie: Option<String>,
    pub adresse: Option<String>,
    pub date_livraison: Option<NaiveDate>,
    pub statut: ProjectStatus,
    pub id_auteur: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub plans_count: i64,
    pub tags: Option<String>,
}

/// A project with its nested plans and annex documents, as returned by
/// `GET /projects/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub plans: Vec<PlanWithVersions>,
    pub documents: Vec<Fichier>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub nom: String,
    pub client: String,
    pub reference_interne: Option<String>,
    pub typologie: Option<String>,
    pub adresse: Option<String>,
    pub date_livraison: Option<NaiveDate>,
    /// Defaults to `En_attente` if omitted.
    pub statut: Option<ProjectStatus>,
    pub id_auteur: DbId,
}

/// DTO for updating an existing project. All fields are optional; only
/// non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub nom: Option<String>,
    pub client: Option<String>,
    pub statut: Option<ProjectStatus>,
    pub reference_interne: Option<String>,
    pub typologie: Option<String>,
    pub adresse: Option<String>,
    pub date_livraison: Option<NaiveDate>,
}

impl UpdateProject {
    /// `true` if the payload carries at least one recognized field.
    pub fn has_updates(&self) -> bool {
        self.nom.is_some()
            || self.client.is_some()
            || self.statut.is_some()
            || self.reference_interne.is_some()
            || self.typologie.is_some()
            || self.adresse.is_some()
            || self.date_livraison.is_some()
    }
}
