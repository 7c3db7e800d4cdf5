//! Pricing article model and DTOs.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Measurement unit for an article price. Maps to the PostgreSQL
/// `unite_article` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "unite_article")]
pub enum ArticleUnit {
    #[serde(rename = "m")]
    #[sqlx(rename = "m")]
    Metre,
    #[serde(rename = "m2")]
    #[sqlx(rename = "m2")]
    MetreCarre,
    #[serde(rename = "m3")]
    #[sqlx(rename = "m3")]
    MetreCube,
    #[serde(rename = "litre")]
    #[sqlx(rename = "litre")]
    Litre,
    #[serde(rename = "kg")]
    #[sqlx(rename = "kg")]
    Kilogramme,
    /// Unitless (per piece).
    #[serde(rename = "u")]
    #[sqlx(rename = "u")]
    Unite,
}

/// An article row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: DbId,
    pub libelle: String,
    pub description: Option<String>,
    pub lot: Option<String>,
    pub sous_categorie: Option<String>,
    pub unite: ArticleUnit,
    pub prix: f64,
    pub created_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    pub libelle: String,
    pub description: Option<String>,
    pub lot: Option<String>,
    pub sous_categorie: Option<String>,
    /// Defaults to `u` (unitless) if omitted.
    pub unite: Option<ArticleUnit>,
    pub prix: Option<f64>,
}

/// DTO for updating an existing article. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub libelle: Option<String>,
    pub description: Option<String>,
    pub lot: Option<String>,
    pub sous_categorie: Option<String>,
    pub unite: Option<ArticleUnit>,
    pub prix: Option<f64>,
}

impl UpdateArticle {
    /// `true` if the payload carries at least one recognized field.
    pub fn has_updates(&self) -> bool {
        self.libelle.is_some()
            || self.description.is_some()
            || self.lot.is_some()
            || self.sous_categorie.is_some()
            || self.unite.is_some()
            || self.prix.is_some()
    }
}
