//! Repository for the `bibliotheques` and `article_bibliotheques` tables.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::Article;
use crate::models::library::{CreateLibrary, Library, LibrarySummary, UpdateLibrary};

/// Column list for `bibliotheques` queries.
const COLUMNS: &str = "id, nom, portee, created_at";

/// Provides CRUD operations for article libraries.
pub struct LibraryRepo;

impl LibraryRepo {
    /// Insert a new library. `portee` defaults to `Personnelle`.
    pub async fn create(pool: &PgPool, input: &CreateLibrary) -> Result<Library, sqlx::Error> {
        let query = format!(
            "INSERT INTO bibliotheques (nom, portee)
             VALUES ($1, COALESCE($2, 'Personnelle'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Library>(&query)
            .bind(&input.nom)
            .bind(&input.portee)
            .fetch_one(pool)
            .await
    }

    /// Find a library by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Library>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bibliotheques WHERE id = $1");
        sqlx::query_as::<_, Library>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all libraries with their derived article counts.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<LibrarySummary>, sqlx::Error> {
        sqlx::query_as::<_, LibrarySummary>(
            "SELECT b.id, b.nom, b.portee, b.created_at,
                    COUNT(ab.id_article) AS articles_count
             FROM bibliotheques b
             LEFT JOIN article_bibliotheques ab ON ab.id_bibliotheque = b.id
             GROUP BY b.id
             ORDER BY b.nom",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a library. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLibrary,
    ) -> Result<Option<Library>, sqlx::Error> {
        let query = format!(
            "UPDATE bibliotheques SET
                nom = COALESCE($2, nom),
                portee = COALESCE($3, portee)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Library>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(&input.portee)
            .fetch_optional(pool)
            .await
    }

    /// Delete a library and its article associations atomically. The
    /// articles themselves survive (they may belong to other libraries).
    /// Returns `false` without committing if no such library exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM article_bibliotheques WHERE id_bibliotheque = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM bibliotheques WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Attach an article to a library. A no-op if already attached.
    pub async fn add_article(
        pool: &PgPool,
        library_id: DbId,
        article_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO article_bibliotheques (id_article, id_bibliotheque)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(article_id)
        .bind(library_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Detach an article from a library. Returns `true` if an association
    /// was removed.
    pub async fn remove_article(
        pool: &PgPool,
        library_id: DbId,
        article_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM article_bibliotheques WHERE id_article = $1 AND id_bibliotheque = $2",
        )
        .bind(article_id)
        .bind(library_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the articles collected in a library, alphabetically by label.
    pub async fn list_articles(pool: &PgPool, library_id: DbId) -> Result<Vec<Article>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            "SELECT a.id, a.libelle, a.description, a.lot, a.sous_categorie,
                    a.unite, a.prix, a.created_at
             FROM articles a
             JOIN article_bibliotheques ab ON ab.id_article = a.id
             WHERE ab.id_bibliotheque = $1
             ORDER BY a.libelle",
        )
        .bind(library_id)
        .fetch_all(pool)
        .await
    }
}
