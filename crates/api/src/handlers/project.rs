//! Handlers for the `/projects` resource.
//!
//! Mutations acknowledge with `{ message }` only; the client discards its
//! local copy and refetches the collection after every successful call.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::notification::CreateNotification;
use metr_db::models::plan::PlanWithVersions;
use metr_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use metr_db::repositories::{FichierRepo, NotificationRepo, PlanRepo, ProjectRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    if input.nom.trim().is_empty() {
        return Err(CoreError::Validation("Le nom du projet est requis".into()).into());
    }
    if input.client.trim().is_empty() {
        return Err(CoreError::Validation("Le nom du client est requis".into()).into());
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::project("Projet cree avec succes", project.id)),
    ))
}

/// GET /api/v1/projects?userId=
///
/// Lists projects owned by or shared with the user, each with its plan
/// count and concatenated tag names.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<metr_db::models::project::ProjectSummary>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, params.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
///
/// Returns the project with its plans (each carrying versions and file
/// records) and its annex documents.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = find_project(&state, id).await?;

    let plans = PlanRepo::list_by_project(&state.pool, id).await?;
    let versions = PlanRepo::list_versions_by_project(&state.pool, id).await?;
    let plan_files = FichierRepo::list_plan_files(&state.pool, id).await?;
    let documents = FichierRepo::list_documents(&state.pool, id).await?;

    let mut versions_by_plan: HashMap<DbId, Vec<_>> = HashMap::new();
    for version in versions {
        versions_by_plan.entry(version.id_plan).or_default().push(version);
    }
    let mut files_by_plan: HashMap<DbId, Vec<_>> = HashMap::new();
    for fichier in plan_files {
        if let Some(plan_id) = fichier.id_plan {
            files_by_plan.entry(plan_id).or_default().push(fichier);
        }
    }

    let plans = plans
        .into_iter()
        .map(|plan| PlanWithVersions {
            versions: versions_by_plan.remove(&plan.id).unwrap_or_default(),
            fichiers: files_by_plan.remove(&plan.id).unwrap_or_default(),
            plan,
        })
        .collect();

    Ok(Json(ProjectDetail {
        project,
        plans,
        documents,
    }))
}

/// PUT /api/v1/projects/{id}
///
/// Partial update. Accepts any of `nom`, `client`, `statut`,
/// `referenceInterne`, `typologie`, `adresse`, `dateLivraison`; rejects a
/// payload carrying none of them. `updated_at` is stamped on every update,
/// including a same-status no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<MessageResponse>> {
    if !input.has_updates() {
        return Err(
            CoreError::Validation("Aucun champ modifiable dans la requete".into()).into(),
        );
    }
    if matches!(&input.nom, Some(nom) if nom.trim().is_empty()) {
        return Err(CoreError::Validation("Le nom du projet ne peut pas etre vide".into()).into());
    }
    if matches!(&input.client, Some(client) if client.trim().is_empty()) {
        return Err(CoreError::Validation("Le nom du client ne peut pas etre vide".into()).into());
    }

    // Status changes go through the transition table, checked here at the
    // API boundary rather than in UI affordances.
    let previous = find_project(&state, id).await?;
    if let Some(next) = input.statut {
        if !previous.statut.can_transition_to(next) {
            return Err(CoreError::Conflict(format!(
                "Transition de statut non autorisee: {} -> {}",
                previous.statut, next
            ))
            .into());
        }
    }

    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))?;

    if updated.statut != previous.statut {
        notify_author(&state, &updated, format!(
            "Le projet \"{}\" est passe au statut {}",
            updated.nom, updated.statut
        ))
        .await;
    }

    Ok(Json(MessageResponse::new("Projet mis a jour avec succes")))
}

/// DELETE /api/v1/projects/{id}
///
/// Transactional cascade delete: plan versions, files (plan-linked and
/// annex documents), plans, tag associations, memberships, then the
/// project row. A mid-sequence failure rolls everything back and reports
/// `CASCADE_FAILED`, distinct from the 404 of an unknown id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let project = find_project(&state, id).await?;

    let deleted = ProjectRepo::delete_cascade(&state.pool, id)
        .await
        .map_err(AppError::CascadeFailed)?;
    if !deleted {
        // Lost a race with a concurrent delete of the same id.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }));
    }
    tracing::info!(project_id = id, "Project deleted with its dependents");

    notify_author(
        &state,
        &project,
        format!("Le projet \"{}\" a ete supprime", project.nom),
    )
    .await;

    Ok(Json(MessageResponse::new("Projet supprime avec succes")))
}

/// Fetch a project or map its absence to a 404.
async fn find_project(state: &AppState, id: DbId) -> Result<Project, AppError> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Projet",
            id,
        }))
}

/// Record a project-event notification for the project's author.
///
/// Best-effort: the mutation already succeeded, so a failure here is
/// logged and swallowed rather than turned into a misleading error reply.
async fn notify_author(state: &AppState, project: &Project, message: String) {
    let input = CreateNotification {
        id_utilisateur: project.id_auteur,
        titre: project.nom.clone(),
        message,
        kind: Some("project".into()),
        priorite: None,
        id_projet: Some(project.id),
        auteur: None,
    };
    if let Err(err) = NotificationRepo::create(&state.pool, &input).await {
        tracing::warn!(error = %err, project_id = project.id, "Failed to record notification");
    }
}
