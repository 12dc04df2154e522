use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// 记录内部错误的真实原因，对外只返回通用信息
    pub fn internal(message: &str, cause: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", message, cause);
        AppError::Internal(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail | StoreError::DuplicateUsername => {
                AppError::Conflict(err.to_string())
            }
            StoreError::IdsExhausted(_) => AppError::internal("Failed to allocate id", err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_reported_as_bad_request() {
        let err = AppError::Conflict("Email already in use".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Email already in use");
    }

    #[test]
    fn store_errors_map_to_responses() {
        let dup: AppError = StoreError::DuplicateUsername.into();
        assert_eq!(dup.status(), StatusCode::BAD_REQUEST);
        assert_eq!(dup.to_string(), "Username already taken");

        let exhausted: AppError = StoreError::IdsExhausted("activity").into();
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(exhausted.to_string(), "Failed to allocate id");
    }

    #[test]
    fn method_not_allowed_is_405() {
        let err = AppError::MethodNotAllowed;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Method not allowed");
    }

    #[test]
    fn internal_error_hides_cause() {
        let err = AppError::internal("Server error during registration", "bcrypt exploded");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server error during registration");
    }
}
