//! Axum route handlers for the JSON generation API.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate, GenerateResponse, GenerationRequest};
use crate::prompts::{self, PromptConfig};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub prompts: Vec<&'static PromptConfig>,
}

/// POST /generate
///
/// Generates neutral, fun and serious variants for one prompt.
/// The body is read as JSON whatever its `Content-Type`. Undecodable bodies are
/// treated as unexpected failures (500), not client errors.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let request: GenerationRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Malformed generate request: {e}")))?;

    let results = generate(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateResponse { results }))
}

/// GET /api/prompts
///
/// The prompt catalog in display order, including each prompt's input schema.
pub async fn handle_list_prompts() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        prompts: prompts::ordered().collect(),
    })
}
