use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Auth { message, .. } => AppError::Auth(message),
            LlmError::Http(e) => AppError::Transport(e.to_string()),
            LlmError::Api { .. } | LlmError::Parse(_) | LlmError::EmptyContent => {
                AppError::Service(err.to_string())
            }
        }
    }
}

impl AppError {
    /// Message shown to the user in a banner. Upstream descriptions are kept verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Auth(msg) => {
                format!("Connection Error: the API key was rejected. {msg}")
            }
            AppError::Transport(msg) => {
                format!("Connection Error: could not reach the completion service. {msg}")
            }
            AppError::Service(msg) => {
                format!("Connection Error: the completion service failed. {msg}")
            }
            AppError::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Auth(msg) => {
                tracing::warn!("Completion auth error: {msg}");
                (StatusCode::UNAUTHORIZED, "AUTH_ERROR")
            }
            AppError::Transport(msg) => {
                tracing::error!("Completion transport error: {msg}");
                (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR")
            }
            AppError::Service(msg) => {
                tracing::error!("Completion service error: {msg}");
                (StatusCode::BAD_GATEWAY, "SERVICE_ERROR")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
