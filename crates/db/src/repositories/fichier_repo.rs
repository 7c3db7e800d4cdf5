//! Repository for the `fichiers` table.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::fichier::{CreateDocument, Fichier};

/// Column list shared across queries.
const COLUMNS: &str = "id, id_projet, id_plan, nom, type_mime, taille, uploaded_at";

/// Provides CRUD operations for uploaded file records.
pub struct FichierRepo;

impl FichierRepo {
    /// Register an uploaded file under a project, optionally linked to a plan.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        plan_id: Option<DbId>,
        input: &CreateDocument,
    ) -> Result<Fichier, sqlx::Error> {
        let query = format!(
            "INSERT INTO fichiers (id_projet, id_plan, nom, type_mime, taille)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fichier>(&query)
            .bind(project_id)
            .bind(plan_id)
            .bind(&input.nom)
            .bind(&input.type_mime)
            .bind(&input.taille)
            .fetch_one(pool)
            .await
    }

    /// List a project's annex documents (files with no parent plan),
    /// most recent upload first.
    pub async fn list_documents(pool: &PgPool, project_id: DbId) -> Result<Vec<Fichier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fichiers
             WHERE id_projet = $1 AND id_plan IS NULL
             ORDER BY uploaded_at DESC"
        );
        sqlx::query_as::<_, Fichier>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List plan-linked file records for a project. Callers group rows by
    /// `id_plan`.
    pub async fn list_plan_files(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Fichier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fichiers
             WHERE id_projet = $1 AND id_plan IS NOT NULL
             ORDER BY id_plan, uploaded_at"
        );
        sqlx::query_as::<_, Fichier>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a single file record, scoped to its project.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fichiers WHERE id = $1 AND id_projet = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
