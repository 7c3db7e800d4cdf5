//! Repository for the `plans` and `plan_versions` tables.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::plan::{CreatePlan, Plan, PlanVersion};

/// Column list for `plans` queries.
const COLUMNS: &str = "id, id_projet, nom, niveau, zone, created_at";

/// Column list for `plan_versions` queries.
const VERSION_COLUMNS: &str = "id, id_plan, numero, date_version";

/// Provides CRUD operations for plans and their versions.
pub struct PlanRepo;

impl PlanRepo {
    /// Insert a new plan and its initial version (numero 1) atomically.
    pub async fn create_with_initial_version(
        pool: &PgPool,
        project_id: DbId,
        input: &CreatePlan,
    ) -> Result<Plan, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO plans (id_projet, nom, niveau, zone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let plan = sqlx::query_as::<_, Plan>(&query)
            .bind(project_id)
            .bind(&input.nom)
            .bind(&input.niveau)
            .bind(&input.zone)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO plan_versions (id_plan, numero) VALUES ($1, 1)")
            .bind(plan.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(plan)
    }

    /// Record a new version of a plan, numbered after the current maximum.
    ///
    /// Returns `None` if the plan does not exist under the given project.
    pub async fn add_version(
        pool: &PgPool,
        project_id: DbId,
        plan_id: DbId,
    ) -> Result<Option<PlanVersion>, sqlx::Error> {
        let query = format!(
            "INSERT INTO plan_versions (id_plan, numero)
             SELECT id, (SELECT COALESCE(MAX(numero), 0) + 1
                         FROM plan_versions WHERE id_plan = $1)
             FROM plans WHERE id = $1 AND id_projet = $2
             RETURNING {VERSION_COLUMNS}"
        );
        sqlx::query_as::<_, PlanVersion>(&query)
            .bind(plan_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List all plans belonging to a project, oldest first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plans WHERE id_projet = $1 ORDER BY created_at");
        sqlx::query_as::<_, Plan>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List every version of every plan belonging to a project, ordered by
    /// plan then version number. Callers group rows by `id_plan`.
    pub async fn list_versions_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PlanVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {VERSION_COLUMNS} FROM plan_versions
             WHERE id_plan IN (SELECT id FROM plans WHERE id_projet = $1)
             ORDER BY id_plan, numero"
        );
        sqlx::query_as::<_, PlanVersion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a plan, its versions and its file records atomically.
    ///
    /// The plan is scoped to its project so a mismatched project id in the
    /// URL cannot delete another project's plan. Returns `false` without
    /// committing if no such plan exists.
    pub async fn delete_cascade(
        pool: &PgPool,
        project_id: DbId,
        plan_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM plan_versions WHERE id_plan = $1")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM fichiers WHERE id_plan = $1")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM plans WHERE id = $1 AND id_projet = $2")
            .bind(plan_id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
