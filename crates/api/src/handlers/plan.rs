//! Handlers for plans nested under `/projects/{id}/plans`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::plan::CreatePlan;
use metr_db::repositories::{PlanRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/projects/{id}/plans
///
/// Creates the plan and its version 1 atomically.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreatePlan>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    if input.nom.trim().is_empty() {
        return Err(CoreError::Validation("Le nom du plan est requis".into()).into());
    }
    ensure_project_exists(&state, project_id).await?;

    let plan = PlanRepo::create_with_initial_version(&state.pool, project_id, &input).await?;
    tracing::info!(project_id, plan_id = plan.id, "Plan created with initial version");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::plan("Plan ajoute avec succes", plan.id)),
    ))
}

/// Acknowledgement for a newly recorded plan version.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub message: String,
    pub numero: i32,
}

/// POST /api/v1/projects/{id}/plans/{planId}/versions
///
/// Records a new version of an existing plan, numbered after the current
/// maximum.
pub async fn add_version(
    State(state): State<AppState>,
    Path((project_id, plan_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<VersionResponse>)> {
    let version = PlanRepo::add_version(&state.pool, project_id, plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }))?;

    Ok((
        StatusCode::CREATED,
        Json(VersionResponse {
            message: "Nouvelle version enregistree".into(),
            numero: version.numero,
        }),
    ))
}

/// DELETE /api/v1/projects/{id}/plans/{planId}
///
/// Removes the plan with its versions and file records, atomically.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, plan_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = PlanRepo::delete_cascade(&state.pool, project_id, plan_id)
        .await
        .map_err(AppError::CascadeFailed)?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }));
    }

    Ok(Json(MessageResponse::new("Plan supprime avec succes")))
}

/// Map a missing project to a 404 before touching its children.
async fn ensure_project_exists(state: &AppState, project_id: DbId) -> Result<(), AppError> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id: project_id,
        }))?;
    Ok(())
}
