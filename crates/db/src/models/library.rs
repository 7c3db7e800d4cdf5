//! Article library model and DTOs.

use metr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::article::Article;

/// A library row from the `bibliotheques` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub id: DbId,
    pub nom: String,
    /// One of `Personnelle`, `Projet`, `Entreprise`.
    pub portee: String,
    pub created_at: Timestamp,
}

/// A library row with its derived article count, for listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub id: DbId,
    pub nom: String,
    pub portee: String,
    pub created_at: Timestamp,
    pub articles_count: i64,
}

/// A library with its articles, as returned by `GET /bibliotheques/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryDetail {
    #[serde(flatten)]
    pub library: Library,
    pub articles: Vec<Article>,
}

/// DTO for creating a new library.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLibrary {
    pub nom: String,
    /// Defaults to `Personnelle` if omitted.
    pub portee: Option<String>,
}

/// DTO for updating a library.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLibrary {
    pub nom: Option<String>,
    pub portee: Option<String>,
}

impl UpdateLibrary {
    /// `true` if the payload carries at least one recognized field.
    pub fn has_updates(&self) -> bool {
        self.nom.is_some() || self.portee.is_some()
    }
}

/// DTO for attaching an existing article to a library.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArticle {
    pub id_article: DbId,
}
