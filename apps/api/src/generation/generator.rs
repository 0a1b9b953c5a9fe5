//! Generation pipeline — lookup → assemble → one completion call → section parse.
//!
//! Stateless: nothing survives the request. Exactly one outbound call per
//! successful lookup and none when the prompt id is unknown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::assembler::assemble;
use crate::generation::sections::{parse_sections, GenerationResult};
use crate::llm_client::prompts::GROWTH_EXPERT_SYSTEM;
use crate::llm_client::CompletionService;
use crate::prompts::lookup;

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt_id: String,
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

/// Success body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub results: GenerationResult,
}

/// Runs one generation.
///
/// Errors:
/// - `InvalidPrompt` when `prompt_id` is not in the catalog (no upstream call made)
/// - `GenerationFailed` when the completion service answers with a non-success status
/// - `Internal` for transport or decode faults
pub async fn generate(
    llm: &dyn CompletionService,
    request: &GenerationRequest,
) -> Result<GenerationResult, AppError> {
    let config = lookup(&request.prompt_id)
        .ok_or_else(|| AppError::InvalidPrompt(request.prompt_id.clone()))?;

    let generation_id = Uuid::new_v4();
    info!(
        "Generation {} started: prompt={} inputs={}",
        generation_id,
        config.id,
        request.inputs.len()
    );

    let prompt = assemble(config, &request.inputs);

    let raw = llm
        .complete(GROWTH_EXPERT_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            warn!("Generation {} upstream call failed: {}", generation_id, e);
            AppError::from(e)
        })?;

    if raw.is_empty() {
        warn!("Generation {} returned no content", generation_id);
    }

    let results = parse_sections(&raw);

    info!(
        "Generation {} finished: {} chars of output",
        generation_id,
        raw.len()
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Canned completion service that records what it was asked.
    struct StubLlm {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<(String, String)>>,
    }

    impl StubLlm {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionService for StubLlm {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some((system.to_string(), prompt.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream exploded".to_string(),
                }),
            }
        }
    }

    fn request(prompt_id: &str, pairs: &[(&str, &str)]) -> GenerationRequest {
        GenerationRequest {
            prompt_id: prompt_id.to_string(),
            inputs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_unknown_prompt_makes_no_upstream_call() {
        let llm = StubLlm::replying("unused");
        let err = generate(&llm, &request("podcast", &[("niche", "x")]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidPrompt(ref id) if id == "podcast"));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_parses_sections_with_one_call() {
        let llm = StubLlm::replying("===NEUTRAL===\nA\n===FUN===\nB\n===SERIOUS===\nC");
        let result = generate(
            &llm,
            &request("reels", &[("niche", "finance"), ("goal", "followers")]),
        )
        .await
        .unwrap();

        assert_eq!(result.neutral, "A");
        assert_eq!(result.fun, "B");
        assert_eq!(result.serious, "C");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sends_persona_and_assembled_prompt() {
        let llm = StubLlm::replying("whatever");
        generate(&llm, &request("bio", &[("niche", "fitness")]))
            .await
            .unwrap();

        let (system, prompt) = llm.last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(system, GROWTH_EXPERT_SYSTEM);
        assert!(prompt.starts_with("Niche/Topic: fitness\n\n"));
        assert!(prompt.contains("===SERIOUS==="));
    }

    #[tokio::test]
    async fn test_upstream_status_is_generation_failed() {
        let llm = StubLlm::failing(503);
        let err = generate(&llm, &request("hooks", &[])).await.unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_output_degrades_to_empty_strings() {
        let llm = StubLlm::replying("");
        let result = generate(&llm, &request("bio", &[])).await.unwrap();
        assert_eq!(result, GenerationResult::default());
    }

    #[test]
    fn test_request_uses_camel_case_prompt_id() {
        let req: GenerationRequest = serde_json::from_value(serde_json::json!({
            "promptId": "reels",
            "inputs": {"niche": "finance", "audience": "students"}
        }))
        .unwrap();
        assert_eq!(req.prompt_id, "reels");
        assert_eq!(req.inputs["audience"], "students");
    }

    #[test]
    fn test_request_without_inputs_defaults_to_empty() {
        let req: GenerationRequest =
            serde_json::from_value(serde_json::json!({"promptId": "bio"})).unwrap();
        assert!(req.inputs.is_empty());
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(GenerateResponse {
            results: GenerationResult {
                neutral: "n".to_string(),
                fun: "f".to_string(),
                serious: "s".to_string(),
            },
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"results": {"neutral": "n", "fun": "f", "serious": "s"}})
        );
    }
}
