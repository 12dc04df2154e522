use axum::extract::{Json, State};

use crate::{
    AppState,
    error::AppError,
    extractors::ValidPath,
    models::{BurnoutSymptoms, LeaderboardEntry},
    utils::parse_id,
};

pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    let entries = state
        .store
        .top_users_by_burnout(state.config.leaderboard_limit)
        .into_iter()
        .map(LeaderboardEntry::from)
        .collect();

    Json(entries)
}

pub async fn symptoms(
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<String>,
) -> Result<Json<BurnoutSymptoms>, AppError> {
    parse_id(&user_id)
        .and_then(|id| state.store.burnout_symptoms(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Burnout symptoms not found".to_string()))
}
