//! Handlers for the `/notifications` resource.
//!
//! Notification state is persisted per user, so read/unread and deletion
//! survive a reload. Callers identify themselves with a `userId` query
//! parameter.

use axum::extract::{Path, Query, State};
use axum::Json;
use metr_core::error::CoreError;
use metr_core::types::DbId;
use metr_db::models::notification::Notification;
use metr_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    pub user_id: DbId,
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Query parameter carrying only the calling user's id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: DbId,
}

/// GET /api/v1/notifications?userId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let notifications =
        NotificationRepo::list_for_user(&state.pool, params.user_id, unread_only, limit, offset)
            .await?;
    Ok(Json(notifications))
}

/// Response payload for the unread counter.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /api/v1/notifications/unread-count?userId=
pub async fn unread_count(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = NotificationRepo::unread_count(&state.pool, params.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}

/// POST /api/v1/notifications/{id}/read?userId=
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<MessageResponse>> {
    let marked = NotificationRepo::mark_read(&state.pool, id, params.user_id).await?;
    if !marked {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }

    Ok(Json(MessageResponse::new("Notification marquee comme lue")))
}

/// POST /api/v1/notifications/read-all?userId=
pub async fn mark_all_read(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<MessageResponse>> {
    let marked = NotificationRepo::mark_all_read(&state.pool, params.user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "{marked} notification(s) marquee(s) comme lue(s)"
    ))))
}

/// DELETE /api/v1/notifications/{id}?userId=
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<UserQuery>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = NotificationRepo::delete(&state.pool, id, params.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }

    Ok(Json(MessageResponse::new("Notification supprimee")))
}
