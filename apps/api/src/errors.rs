use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers when the model produced nothing usable.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate text content.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Total text-generation failure is the only error a caller of the pipeline sees;
/// malformed request bodies are rejected earlier by the `Json` extractor.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Text generation failed")]
    Generation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Generation => {
                tracing::error!("Text generation returned no usable content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    GENERATION_FAILED_MESSAGE,
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
