//! Repository for the `notifications` table.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

/// Column list shared across queries.
const COLUMNS: &str = "id, id_utilisateur, titre, message, type, priorite, \
                       id_projet, auteur, lu, read_at, created_at";

/// Provides persisted notification state per user.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a new notification. `type` defaults to `system`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (id_utilisateur, titre, message, type, priorite, id_projet, auteur)
             VALUES ($1, $2, $3, COALESCE($4, 'system'), $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.id_utilisateur)
            .bind(&input.titre)
            .bind(&input.message)
            .bind(&input.kind)
            .bind(&input.priorite)
            .bind(input.id_projet)
            .bind(&input.auteur)
            .fetch_one(pool)
            .await
    }

    /// List a user's notifications, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE id_utilisateur = $1 AND (NOT $2 OR lu = FALSE)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(unread_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE id_utilisateur = $1 AND lu = FALSE",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    /// Mark one notification as read. Scoped to the owning user; returns
    /// `true` if a row was updated.
    pub async fn mark_read(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET lu = TRUE, read_at = NOW()
             WHERE id = $1 AND id_utilisateur = $2 AND lu = FALSE",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's notifications as read. Returns how many were marked.
    pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET lu = TRUE, read_at = NOW()
             WHERE id_utilisateur = $1 AND lu = FALSE",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete one notification. Scoped to the owning user; returns `true`
    /// if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND id_utilisateur = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
