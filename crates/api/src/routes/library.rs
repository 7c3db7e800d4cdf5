//! Route definitions for the `/bibliotheques` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::library;
use crate::state::AppState;

/// Routes mounted at `/bibliotheques`.
///
/// ```text
/// GET    /                            -> list (with article counts)
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id (with articles)
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// POST   /{id}/articles               -> add_article
/// DELETE /{id}/articles/{articleId}   -> remove_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(library::list).post(library::create))
        .route(
            "/{id}",
            get(library::get_by_id)
                .put(library::update)
                .delete(library::delete),
        )
        .route("/{id}/articles", post(library::add_article))
        .route(
            "/{id}/articles/{article_id}",
            delete(library::remove_article),
        )
}
