//! Repository for the `articles` table.

use metr_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Column list shared across queries.
const COLUMNS: &str = "id, libelle, description, lot, sous_categorie, unite, prix, created_at";

/// Provides CRUD operations for pricing articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    ///
    /// If `unite` is `None`, defaults to `u` (unitless); `prix` defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (libelle, description, lot, sous_categorie, unite, prix)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'u'::unite_article), COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.libelle)
            .bind(&input.description)
            .bind(&input.lot)
            .bind(&input.sous_categorie)
            .bind(input.unite)
            .bind(input.prix)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all articles, alphabetically by label.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY libelle");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Update an article. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                libelle = COALESCE($2, libelle),
                description = COALESCE($3, description),
                lot = COALESCE($4, lot),
                sous_categorie = COALESCE($5, sous_categorie),
                unite = COALESCE($6, unite),
                prix = COALESCE($7, prix)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.libelle)
            .bind(&input.description)
            .bind(&input.lot)
            .bind(&input.sous_categorie)
            .bind(input.unite)
            .bind(input.prix)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article and its library associations atomically.
    /// Returns `false` without committing if no such article exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM article_bibliotheques WHERE id_article = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
