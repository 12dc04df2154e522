use axum::{
    extract::{Json, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::AppError,
    extractors::{ValidJson, ValidPath},
    models::Notification,
    utils::parse_id,
};

use super::model::CreateNotificationRequest;

pub async fn list_notifications(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<String>,
) -> Json<Vec<Notification>> {
    let notifications = parse_id(&user_id)
        .map(|id| state.store.notifications_for_user(id))
        .unwrap_or_default();
    Json(notifications)
}

#[axum::debug_handler]
pub async fn create_notification(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = state.store.create_notification(req.into())?;
    tracing::debug!(
        "Created {} notification {} for user {}",
        notification.kind,
        notification.id,
        notification.user_id
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

/// 标记已读，重复调用同样返回 200
pub async fn mark_read(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<String>,
) -> Result<Json<Notification>, AppError> {
    parse_id(&id)
        .and_then(|id| state.store.mark_notification_read(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
}
