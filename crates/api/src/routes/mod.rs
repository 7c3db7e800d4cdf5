pub mod article;
pub mod health;
pub mod library;
pub mod notification;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 project CRUD + cascade delete
/// /projects/{id}/plans      plans and versions
/// /projects/{id}/documents  annex documents
/// /projects/{id}/tags       tag associations
/// /projects/{id}/members    sharing
/// /articles                 pricing article CRUD
/// /bibliotheques            article libraries
/// /notifications            persisted per-user notifications
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/articles", article::router())
        .nest("/bibliotheques", library::router())
        .nest("/notifications", notification::router())
}
