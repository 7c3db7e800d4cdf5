//! Handlers for the `/articles` resource (pricing library entries).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::article::{Article, CreateArticle, UpdateArticle};
use metr_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<Article>)> {
    if input.libelle.trim().is_empty() {
        return Err(CoreError::Validation("Le libelle de l'article est requis".into()).into());
    }
    if matches!(input.prix, Some(prix) if prix < 0.0) {
        return Err(CoreError::Validation("Le prix ne peut pas etre negatif".into()).into());
    }

    let article = ArticleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/articles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(Json(articles))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}

/// PUT /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<MessageResponse>> {
    if !input.has_updates() {
        return Err(
            CoreError::Validation("Aucun champ modifiable dans la requete".into()).into(),
        );
    }
    if matches!(input.prix, Some(prix) if prix < 0.0) {
        return Err(CoreError::Validation("Le prix ne peut pas etre negatif".into()).into());
    }

    ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;

    Ok(Json(MessageResponse::new("Article mis a jour avec succes")))
}

/// DELETE /api/v1/articles/{id}
///
/// Also removes the article's library associations.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ArticleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }));
    }

    Ok(Json(MessageResponse::new("Article supprime avec succes")))
}
