use axum::{
    extract::{Json, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::AppError,
    extractors::{ValidJson, ValidPath},
    models::Activity,
    storage::Store,
    utils::parse_id,
};

use super::model::{CreateActivityRequest, EnrichedActivity};

fn enrich_all(store: &Store, activities: Vec<Activity>) -> Vec<EnrichedActivity> {
    activities
        .into_iter()
        .map(|activity| EnrichedActivity::load(store, activity))
        .collect()
}

// 最近的动态
pub async fn list_activities(State(state): State<AppState>) -> Json<Vec<EnrichedActivity>> {
    let activities = state
        .store
        .recent_activities(state.config.activity_feed_limit);
    Json(enrich_all(&state.store, activities))
}

// 某个用户的动态，id 无法解析时返回空列表
pub async fn list_user_activities(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<String>,
) -> Json<Vec<EnrichedActivity>> {
    let activities = parse_id(&user_id)
        .map(|id| {
            state
                .store
                .user_activities(id, state.config.activity_feed_limit)
        })
        .unwrap_or_default();
    Json(enrich_all(&state.store, activities))
}

#[axum::debug_handler]
pub async fn create_activity(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateActivityRequest>,
) -> Result<(StatusCode, Json<EnrichedActivity>), AppError> {
    let activity = state.store.create_activity(req.into())?;
    tracing::info!(
        "User {} posted activity {}",
        activity.user_id,
        activity.id
    );

    Ok((
        StatusCode::CREATED,
        Json(EnrichedActivity::load(&state.store, activity)),
    ))
}
