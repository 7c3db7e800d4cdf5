//! Route definitions for the `/notifications` resource.
//!
//! All endpoints take a `userId` query parameter.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /?userId=                  -> list
/// GET    /unread-count?userId=      -> unread_count
/// POST   /read-all?userId=          -> mark_all_read
/// POST   /{id}/read?userId=         -> mark_read
/// DELETE /{id}?userId=              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/unread-count", get(notification::unread_count))
        .route("/read-all", post(notification::mark_all_read))
        .route("/{id}/read", post(notification::mark_read))
        .route("/{id}", delete(notification::delete))
}
