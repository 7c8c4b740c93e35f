//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_post;
use crate::models::content::{GenerationRequest, GenerationResponse};
use crate::state::AppState;

/// POST /generate-post
///
/// Full pipeline: prompt assembly → completion → parse → advisory validation.
/// Responds 500 only when nothing usable came back from the model.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, AppError> {
    let post = generate_post(state.llm.as_ref(), &request).await;

    if post.content.is_empty() {
        return Err(AppError::Generation);
    }

    Ok(Json(GenerationResponse::from(post.content)))
}
