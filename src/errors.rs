use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed for: {0}")]
    Validation(ValidationErrors),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("unknown booking status: {0}")]
    UnknownStatus(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownStatus(_) => StatusCode::BAD_REQUEST,
        };

        let body = match self {
            AppError::Validation(errors) => serde_json::json!({ "errors": errors }),
            other => serde_json::json!({ "error": other.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
