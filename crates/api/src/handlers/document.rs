//! Handlers for annex documents nested under `/projects/{id}/documents`.
//!
//! Only file metadata is stored; the bytes live in external blob storage.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::fichier::CreateDocument;
use metr_db::repositories::{FichierRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/projects/{id}/documents
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateDocument>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    if input.nom.trim().is_empty() {
        return Err(CoreError::Validation("Le nom du document est requis".into()).into());
    }

    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id: project_id,
        }))?;

    let fichier = FichierRepo::create(&state.pool, project_id, None, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::fichier("Document ajoute avec succes", fichier.id)),
    ))
}

/// DELETE /api/v1/projects/{id}/documents/{docId}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, doc_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FichierRepo::delete(&state.pool, project_id, doc_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Fichier",
            id: doc_id,
        }));
    }

    Ok(Json(MessageResponse::new("Document supprime avec succes")))
}
