use axum::extract::{Json, State};

use crate::{AppState, error::AppError, extractors::ValidPath, models::Company};

pub async fn list_companies(State(state): State<AppState>) -> Json<Vec<Company>> {
    Json(state.store.list_companies())
}

pub async fn get_company(
    State(state): State<AppState>,
    ValidPath(code): ValidPath<String>,
) -> Result<Json<Company>, AppError> {
    state
        .store
        .get_company_by_code(&code)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
}
