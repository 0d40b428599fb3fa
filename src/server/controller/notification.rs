use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto, MessageDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications, unread first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - The caller's notifications
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "The caller's notifications", body = ListDto<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let notifications = NotificationService::new(&state.db)
        .list_own(&auth_user)
        .await?;

    Ok((StatusCode::OK, Json(ListDto::new(notifications))))
}

/// Mark one of the caller's notifications as read.
///
/// # Access Control
/// - Any authenticated user; only the caller's own notifications are visible
///
/// # Returns
/// - `200 OK` - Notification marked as read
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No such notification for this caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Marked as read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    NotificationService::new(&state.db)
        .mark_read(id, &auth_user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Notification marked as read"))))
}
