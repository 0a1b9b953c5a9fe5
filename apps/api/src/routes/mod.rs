pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::presentation::handlers as presentation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JSON API
        .route("/generate", post(generation::handle_generate))
        .route("/api/prompts", get(generation::handle_list_prompts))
        // HTML generator page
        .route("/", get(presentation::handle_index))
        .route(
            "/prompts/:id",
            get(presentation::handle_prompt_page).post(presentation::handle_prompt_submit),
        )
        .with_state(state)
}
