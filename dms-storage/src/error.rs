//! Application errors

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dms_printer::PrintError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Printer fault, passed through unchanged
    #[error(transparent)]
    Print(#[from] PrintError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Print(PrintError::DeviceNotFound { .. }) => "E1001",
            AppError::Print(_) => "E1002",
            AppError::Internal(_) => "E9001",
        };

        let body = Json(serde_json::json!({
            "code": code,
            "error": self.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
