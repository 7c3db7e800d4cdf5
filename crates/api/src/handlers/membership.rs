//! Handlers for project sharing, nested under `/projects/{id}/members`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::repositories::{MembershipRepo, ProjectRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// DTO for sharing a project with a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMember {
    pub id_utilisateur: DbId,
    /// Defaults to `lecteur`.
    pub role: Option<String>,
}

/// POST /api/v1/projects/{id}/members
pub async fn add(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddMember>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id: project_id,
        }))?;
    UserRepo::find_by_id(&state.pool, input.id_utilisateur)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id: input.id_utilisateur,
        }))?;

    let role = input.role.as_deref().unwrap_or("lecteur");
    MembershipRepo::add(&state.pool, project_id, input.id_utilisateur, role).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Projet partage avec succes")),
    ))
}

/// DELETE /api/v1/projects/{id}/members/{userId}
pub async fn remove(
    State(state): State<AppState>,
    Path((project_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = MembershipRepo::remove(&state.pool, project_id, user_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id: user_id,
        }));
    }

    Ok(Json(MessageResponse::new("Partage revoque avec succes")))
}
