//! Repository for the `projet_utilisateurs` table (project sharing).

use metr_core::types::DbId;
use sqlx::PgPool;

/// Provides membership operations for shared projects.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Share a project with a user. Re-sharing updates the role.
    pub async fn add(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projet_utilisateurs (id_projet, id_utilisateur, role)
             VALUES ($1, $2, $3)
             ON CONFLICT (id_projet, id_utilisateur) DO UPDATE SET role = EXCLUDED.role",
        )
        .bind(project_id)
        .bind(user_id)
        .bind(role)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Revoke a user's membership. Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, project_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM projet_utilisateurs WHERE id_projet = $1 AND id_utilisateur = $2",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
