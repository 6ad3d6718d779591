use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::ValidationError;
use marks::ServiceError;
use serde_json::json;
use thiserror::Error;

/// The message every rejected submission carries, whatever the field.
pub const INVALID_INPUT: &str = "Invalid input";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

/// Converts our custom `AppError` into the `{ success: false, error }` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(reason) => {
                tracing::warn!(%reason, "Rejected marks submission.");
                (StatusCode::BAD_REQUEST, INVALID_INPUT.to_string())
            }
            AppError::MalformedPayload(reason) => {
                tracing::warn!(%reason, "Rejected unreadable marks request.");
                (StatusCode::BAD_REQUEST, INVALID_INPUT.to_string())
            }
            AppError::Service(service_err) => {
                tracing::error!(error = ?service_err, "Service error.");
                (StatusCode::INTERNAL_SERVER_ERROR, service_err.to_string())
            }
        };

        let body = Json(json!({ "error": error_message, "success": false }));
        (status, body).into_response()
    }
}
