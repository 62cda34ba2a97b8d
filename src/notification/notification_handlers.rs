use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    state::AppState,
};
use super::{
    notification_dto::{
        CreateNotificationRequest, DeleteNotificationRequest, ListNotificationsQuery,
        MarkReadRequest, MarkReadResponse, NotificationListResponse, UnreadCountResponse,
    },
    notification_models::Notification,
};

/// Create a notification for a user
#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Missing or invalid field")
    ),
    tag = "notifications"
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let notification = state.notification_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// List active notifications with optional owner scope and search
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(
        ("user_id" = Option<i64>, Query, description = "Restrict to this owner"),
        ("search_text" = Option<String>, Query, description = "Case-insensitive substring match on title or content"),
        ("page" = Option<u32>, Query, description = "Page number, 1-indexed"),
        ("page_size" = Option<u32>, Query, description = "Items per page, 1..=100")
    ),
    responses(
        (status = 200, description = "Matching notifications with pre-pagination count", body = NotificationListResponse),
        (status = 400, description = "Pagination parameters out of range")
    ),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<NotificationListResponse>> {
    query.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (count, data) = state.notification_service.list(&query).await?;

    Ok(Json(NotificationListResponse { count, data }))
}

/// Mark a selection of notifications read or unread
#[utoipa::path(
    put,
    path = "/api/v1/notifications/mark-read",
    request_body = MarkReadRequest,
    responses(
        (status = 200, description = "Read state updated", body = MarkReadResponse),
        (status = 400, description = "Neither notification_ids nor mark_all supplied"),
        (status = 404, description = "Selection matched no active notifications")
    ),
    tag = "notifications"
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    Json(payload): Json<MarkReadRequest>,
) -> Result<Json<MarkReadResponse>> {
    let read = payload.read;
    let count = state.notification_service.mark_read(payload).await?;

    let detail = format!(
        "{} notifications marked as {}",
        count,
        if read { "read" } else { "unread" }
    );

    Ok(Json(MarkReadResponse { count, detail }))
}

/// Soft-delete a notification
#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification id")
    ),
    request_body = DeleteNotificationRequest,
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DeleteNotificationRequest>,
) -> Result<StatusCode> {
    state
        .notification_service
        .delete(id, payload.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct UnreadCountQuery {
    pub user_id: i64,
}

/// Count active unread notifications for a user
#[utoipa::path(
    get,
    path = "/api/v1/notifications/unread/count",
    params(
        ("user_id" = i64, Query, description = "Owner to count for")
    ),
    responses(
        (status = 200, description = "Unread count", body = UnreadCountResponse)
    ),
    tag = "notifications"
)]
pub async fn unread_notification_count(
    State(state): State<AppState>,
    Query(query): Query<UnreadCountQuery>,
) -> Result<Json<UnreadCountResponse>> {
    let unread_count = state
        .notification_service
        .unread_count(query.user_id)
        .await?;

    Ok(Json(UnreadCountResponse { unread_count }))
}
