//! Handlers for the `/bibliotheques` resource (article libraries).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::library::{
    AddArticle, CreateLibrary, Library, LibraryDetail, LibrarySummary, UpdateLibrary,
};
use metr_db::repositories::{ArticleRepo, LibraryRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Recognized library scopes.
const SCOPES: &[&str] = &["Personnelle", "Projet", "Entreprise"];

/// POST /api/v1/bibliotheques
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    if input.nom.trim().is_empty() {
        return Err(CoreError::Validation("Le nom de la bibliotheque est requis".into()).into());
    }
    validate_scope(input.portee.as_deref())?;

    let library = LibraryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// GET /api/v1/bibliotheques
///
/// Lists libraries with their derived article counts.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LibrarySummary>>> {
    let libraries = LibraryRepo::list_with_counts(&state.pool).await?;
    Ok(Json(libraries))
}

/// GET /api/v1/bibliotheques/{id}
///
/// Returns the library with its collected articles.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LibraryDetail>> {
    let library = find_library(&state, id).await?;
    let articles = LibraryRepo::list_articles(&state.pool, id).await?;
    Ok(Json(LibraryDetail { library, articles }))
}

/// PUT /api/v1/bibliotheques/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLibrary>,
) -> AppResult<Json<MessageResponse>> {
    if !input.has_updates() {
        return Err(
            CoreError::Validation("Aucun champ modifiable dans la requete".into()).into(),
        );
    }
    validate_scope(input.portee.as_deref())?;

    LibraryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bibliotheque",
            id,
        }))?;

    Ok(Json(MessageResponse::new("Bibliotheque mise a jour avec succes")))
}

/// DELETE /api/v1/bibliotheques/{id}
///
/// Removes the library and its associations; articles survive.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = LibraryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Bibliotheque",
            id,
        }));
    }

    Ok(Json(MessageResponse::new("Bibliotheque supprimee avec succes")))
}

/// POST /api/v1/bibliotheques/{id}/articles
pub async fn add_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddArticle>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    find_library(&state, id).await?;
    ArticleRepo::find_by_id(&state.pool, input.id_article)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id: input.id_article,
        }))?;

    LibraryRepo::add_article(&state.pool, id, input.id_article).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Article ajoute a la bibliotheque")),
    ))
}

/// DELETE /api/v1/bibliotheques/{id}/articles/{articleId}
pub async fn remove_article(
    State(state): State<AppState>,
    Path((id, article_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = LibraryRepo::remove_article(&state.pool, id, article_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id: article_id,
        }));
    }

    Ok(Json(MessageResponse::new("Article retire de la bibliotheque")))
}

/// Fetch a library or map its absence to a 404.
async fn find_library(state: &AppState, id: DbId) -> Result<Library, AppError> {
    LibraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bibliotheque",
            id,
        }))
}

/// Reject a scope outside the recognized set.
fn validate_scope(portee: Option<&str>) -> Result<(), AppError> {
    if let Some(portee) = portee {
        if !SCOPES.contains(&portee) {
            return Err(CoreError::Validation(format!(
                "Portee inconnue: {portee} (attendu: Personnelle, Projet ou Entreprise)"
            ))
            .into());
        }
    }
    Ok(())
}
