//! Handlers for tags nested under `/projects/{id}/tags`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::tag::AttachTag;
use metr_db::repositories::{ProjectRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/projects/{id}/tags
///
/// Creates the tag on first use, then attaches it. Idempotent.
pub async fn attach(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AttachTag>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let nom = input.nom.trim();
    if nom.is_empty() {
        return Err(CoreError::Validation("Le nom du tag est requis".into()).into());
    }

    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id: project_id,
        }))?;

    let tag = TagRepo::create_or_get(&state.pool, nom).await?;
    TagRepo::attach(&state.pool, project_id, tag.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::tag("Tag associe avec succes", tag.id)),
    ))
}

/// DELETE /api/v1/projects/{id}/tags/{tagId}
pub async fn detach(
    State(state): State<AppState>,
    Path((project_id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let detached = TagRepo::detach(&state.pool, project_id, tag_id).await?;
    if !detached {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }));
    }

    Ok(Json(MessageResponse::new("Tag dissocie avec succes")))
}
