//! Repository for the `tags` and `projet_tags` tables.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const COLUMNS: &str = "id, nom, created_at";

/// Provides tag CRUD and project-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// Create a tag or return the existing one with the same name.
    ///
    /// Uses `ON CONFLICT` for idempotent creation.
    pub async fn create_or_get(pool: &PgPool, nom: &str) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (nom) VALUES ($1)
             ON CONFLICT (nom) DO UPDATE SET nom = EXCLUDED.nom
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query).bind(nom).fetch_one(pool).await
    }

    /// Attach a tag to a project. A no-op if already attached.
    pub async fn attach(pool: &PgPool, project_id: DbId, tag_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projet_tags (id_projet, id_tag) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Detach a tag from a project. Returns `true` if an association was removed.
    pub async fn detach(pool: &PgPool, project_id: DbId, tag_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projet_tags WHERE id_projet = $1 AND id_tag = $2")
            .bind(project_id)
            .bind(tag_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the tags attached to a project, alphabetically.
    pub async fn list_for_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.nom, t.created_at FROM tags t
             JOIN projet_tags pt ON pt.id_tag = t.id
             WHERE pt.id_projet = $1
             ORDER BY t.nom",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
