//! Repository for the `projets` table, including the cascade-delete
//! coordinator.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nom, client, reference_interne, typologie, adresse, \
                       date_livraison, statut, id_auteur, created_at, updated_at";

/// Provides CRUD operations and the cascade delete for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `statut` is `None` in the input, defaults to `En_attente`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projets
                (nom, client, reference_interne, typologie, adresse, date_livraison, statut, id_auteur)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'En_attente'::statut_projet), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.nom)
            .bind(&input.client)
            .bind(&input.reference_interne)
            .bind(&input.typologie)
            .bind(&input.adresse)
            .bind(input.date_livraison)
            .bind(input.statut)
            .bind(input.id_auteur)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projets WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects owned by or shared with a user, most recently modified
    /// first. Each row carries its plan count and concatenated tag names.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.nom, p.client, p.reference_interne, p.typologie, p.adresse,
                    p.date_livraison, p.statut, p.id_auteur, p.created_at, p.updated_at,
                    COUNT(DISTINCT pl.id) AS plans_count,
                    STRING_AGG(DISTINCT t.nom, ', ' ORDER BY t.nom) AS tags
             FROM projets p
             LEFT JOIN plans pl ON pl.id_projet = p.id
             LEFT JOIN projet_tags pt ON pt.id_projet = p.id
             LEFT JOIN tags t ON t.id = pt.id_tag
             WHERE p.id_auteur = $1
                OR p.id IN (SELECT id_projet FROM projet_utilisateurs WHERE id_utilisateur = $1)
             GROUP BY p.id
             ORDER BY p.updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied, but
    /// `updated_at` is always stamped, including same-value updates.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projets SET
                nom = COALESCE($2, nom),
                client = COALESCE($3, client),
                statut = COALESCE($4, statut),
                reference_interne = COALESCE($5, reference_interne),
                typologie = COALESCE($6, typologie),
                adresse = COALESCE($7, adresse),
                date_livraison = COALESCE($8, date_livraison),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(&input.client)
            .bind(input.statut)
            .bind(&input.reference_interne)
            .bind(&input.typologie)
            .bind(&input.adresse)
            .bind(input.date_livraison)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and every record that exists only in reference to
    /// it, inside a single transaction.
    ///
    /// Dependents are removed leaves-first so foreign keys hold without
    /// `ON DELETE CASCADE`: plan versions, then files (plan-linked and annex
    /// documents alike), then plans, tag associations, memberships, and
    /// finally the project row.
    ///
    /// Returns `false` without committing if the project row does not exist;
    /// any SQL failure mid-sequence rolls the whole delete back.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM plan_versions
             WHERE id_plan IN (SELECT id FROM plans WHERE id_projet = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM fichiers WHERE id_projet = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM plans WHERE id_projet = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM projet_tags WHERE id_projet = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM projet_utilisateurs WHERE id_projet = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Nothing to delete; dropping the transaction rolls back.
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
