//! Axum route handlers for the HTML generator page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::generate;
use crate::generation::tone::Tone;
use crate::presentation::form::FormState;
use crate::presentation::page::{render_not_found, render_page};
use crate::state::AppState;

const INCOMPLETE_NOTICE: &str = "Fill in every field before generating.";

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormState::default(), None))
}

/// GET /prompts/:id
///
/// Switching prompts always lands on an empty form with the neutral tone.
pub async fn handle_prompt_page(Path(prompt_id): Path<String>) -> Response {
    match FormState::for_prompt(&prompt_id) {
        Ok(form) => Html(render_page(&form, None)).into_response(),
        Err(err) => not_found_page(err),
    }
}

/// POST /prompts/:id
///
/// Runs one generation from the submitted form and renders the page with results.
/// A failed generation is shown inline in place of the content.
pub async fn handle_prompt_submit(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let mut form = match FormState::for_prompt(&prompt_id) {
        Ok(form) => form,
        Err(err) => return not_found_page(err),
    };

    for (name, value) in fields {
        if name == "tone" {
            if let Some(tone) = Tone::from_id(&value) {
                form.set_tone(tone);
            }
        } else {
            form.set_input(&name, value);
        }
    }

    if !form.is_complete() {
        info!("Rejected incomplete form for prompt {}", prompt_id);
        let page = render_page(&form, Some(INCOMPLETE_NOTICE));
        return (StatusCode::BAD_REQUEST, Html(page)).into_response();
    }

    let status = match generate(state.llm.as_ref(), &form.to_request()).await {
        Ok(results) => {
            form.set_results(results);
            StatusCode::OK
        }
        Err(err) => {
            err.log();
            form.set_error(&err.public_message());
            err.status()
        }
    };

    (status, Html(render_page(&form, None))).into_response()
}

fn not_found_page(err: AppError) -> Response {
    info!("Unknown prompt page: {err}");
    (err.status(), Html(render_not_found(&err.public_message()))).into_response()
}
