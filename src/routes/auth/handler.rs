use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    AppState,
    error::AppError,
    extractors::ValidJson,
    models::{NewUser, User},
    utils::{hash_password, is_corporate_email, verify_password},
};

use super::model::{LoginRequest, RegisterRequest};

const REGISTER_FAILED: &str = "Server error during registration";
const LOGIN_FAILED: &str = "Server error during login";

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    if req
        .burnout_score
        .is_some_and(|score| !(0..=100).contains(&score))
    {
        return Err(AppError::Validation(
            "burnoutScore must be between 0 and 100".to_string(),
        ));
    }

    // 快速失败，保证重复提示优先于域名提示；真正的唯一性在插入时再检查一次
    if let Some(violation) = state
        .store
        .registration_conflict(&req.email, &req.username)
    {
        return Err(violation.into());
    }

    if !is_corporate_email(&req.email) {
        tracing::debug!("Rejected non-corporate email: {}", req.email);
        return Err(AppError::Conflict(
            "Only corporate emails from major tech companies are allowed".to_string(),
        ));
    }

    let cost = state.config.bcrypt_cost;
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| AppError::internal(REGISTER_FAILED, e))?
        .map_err(|e| AppError::internal(REGISTER_FAILED, e))?;

    let user = state.store.insert_user_if_unique(NewUser {
        username: req.username,
        email: req.email,
        password_hash,
        display_name: req.display_name,
        company: req.company,
        burnout_score: req.burnout_score,
        avatar_initials: req.avatar_initials,
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let (Some(email), Some(password)) = (non_empty(req.email), non_empty(req.password)) else {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    // 邮箱不存在与密码错误返回同样的结果
    let Some(user) = state.store.get_user_by_email(&email) else {
        tracing::debug!("Login attempt for unknown email");
        return Err(invalid_credentials());
    };

    let hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?
        .map_err(|e| AppError::internal(LOGIN_FAILED, e))?;

    if !valid {
        tracing::debug!("Wrong password for user {}", user.id);
        return Err(invalid_credentials());
    }

    tracing::info!("User {} logged in", user.id);
    Ok(Json(user))
}

// 缺失、为空或不是字符串都视为没填
fn non_empty(field: Option<Value>) -> Option<String> {
    match field {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".to_string())
}
