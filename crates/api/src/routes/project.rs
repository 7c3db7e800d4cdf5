//! Route definitions for the `/projects` resource.
//!
//! Also nests plan, document, tag and membership routes under
//! `/projects/{id}/...`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{document, membership, plan, project, tag};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /?userId=                          -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete (cascade)
///
/// POST   /{id}/plans                        -> plan::create (+ version 1)
/// POST   /{id}/plans/{planId}/versions      -> plan::add_version
/// DELETE /{id}/plans/{planId}               -> plan::delete (cascade)
///
/// POST   /{id}/documents                    -> document::create
/// DELETE /{id}/documents/{docId}            -> document::delete
///
/// POST   /{id}/tags                         -> tag::attach
/// DELETE /{id}/tags/{tagId}                 -> tag::detach
///
/// POST   /{id}/members                      -> membership::add
/// DELETE /{id}/members/{userId}             -> membership::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/plans", post(plan::create))
        .route("/{id}/plans/{plan_id}/versions", post(plan::add_version))
        .route("/{id}/plans/{plan_id}", delete(plan::delete))
        .route("/{id}/documents", post(document::create))
        .route("/{id}/documents/{doc_id}", delete(document::delete))
        .route("/{id}/tags", post(tag::attach))
        .route("/{id}/tags/{tag_id}", delete(tag::detach))
        .route("/{id}/members", post(membership::add))
        .route("/{id}/members/{user_id}", delete(membership::remove))
}
