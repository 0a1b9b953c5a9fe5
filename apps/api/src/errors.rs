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
///
/// Every variant renders as `{ "error": "<message>" }`. Upstream and internal
/// details are logged here and never leaked to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPrompt(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::GenerationFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidPrompt(_) => "Invalid prompt".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::GenerationFailed(_) => "Failed to generate content".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Logs server-side detail for the 5xx variants.
    pub fn log(&self) {
        match self {
            AppError::GenerationFailed(e) => tracing::error!("Generation failed: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::InvalidPrompt(id) => tracing::debug!("Rejected unknown prompt id {id:?}"),
            AppError::NotFound(_) => {}
        }
    }
}

/// Upstream status failures are `GenerationFailed`; transport and decode
/// faults are unexpected and surface as `Internal`.
impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            api @ LlmError::Api { .. } => AppError::GenerationFailed(api),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}
