//! View state for the generator page: active prompt, inputs, tone, results.

use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::generation::generator::GenerationRequest;
use crate::generation::sections::GenerationResult;
use crate::generation::tone::Tone;
use crate::prompts::{self, PromptConfig};

#[derive(Debug, Clone)]
pub struct FormState {
    prompt: &'static PromptConfig,
    inputs: BTreeMap<String, String>,
    tone: Tone,
    results: Option<GenerationResult>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            prompt: prompts::default_prompt(),
            inputs: BTreeMap::new(),
            tone: Tone::default(),
            results: None,
        }
    }
}

impl FormState {
    /// Fresh state on the given prompt.
    pub fn for_prompt(prompt_id: &str) -> Result<Self, AppError> {
        let mut state = Self::default();
        state.select_prompt(prompt_id)?;
        Ok(state)
    }

    pub fn prompt(&self) -> &'static PromptConfig {
        self.prompt
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn results(&self) -> Option<&GenerationResult> {
        self.results.as_ref()
    }

    pub fn value(&self, input_id: &str) -> &str {
        self.inputs.get(input_id).map(String::as_str).unwrap_or_default()
    }

    /// Switches prompt. Inputs and results are cleared and tone returns to neutral.
    pub fn select_prompt(&mut self, prompt_id: &str) -> Result<(), AppError> {
        let prompt = prompts::lookup(prompt_id)
            .ok_or_else(|| AppError::NotFound(format!("Prompt '{prompt_id}' not found")))?;
        self.prompt = prompt;
        self.inputs.clear();
        self.results = None;
        self.tone = Tone::Neutral;
        Ok(())
    }

    /// Stores a value for a declared input. Returns false for ids the prompt does not declare.
    pub fn set_input(&mut self, input_id: &str, value: impl Into<String>) -> bool {
        if self.prompt.input(input_id).is_none() {
            return false;
        }
        self.inputs.insert(input_id.to_string(), value.into());
        true
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// True when every declared input has a value that is not blank.
    pub fn is_complete(&self) -> bool {
        self.prompt
            .inputs
            .iter()
            .all(|input| !self.value(input.id).trim().is_empty())
    }

    pub fn set_results(&mut self, results: GenerationResult) {
        self.results = Some(results);
    }

    /// Shows a failure in place of generated content.
    pub fn set_error(&mut self, message: &str) {
        self.results = Some(GenerationResult {
            neutral: format!("Error: {message}"),
            fun: String::new(),
            serious: String::new(),
        });
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt_id: self.prompt.id.to_string(),
            inputs: self.inputs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_reels() -> FormState {
        let mut form = FormState::for_prompt("reels").unwrap();
        form.set_input("niche", "finance");
        form.set_input("audience", "students");
        form.set_input("goal", "followers");
        form
    }

    #[test]
    fn test_starts_on_first_prompt() {
        let form = FormState::default();
        assert_eq!(form.prompt().id, "bio");
        assert_eq!(form.tone(), Tone::Neutral);
        assert!(form.results().is_none());
    }

    #[test]
    fn test_complete_requires_every_input() {
        let mut form = FormState::for_prompt("reels").unwrap();
        assert!(!form.is_complete());

        form.set_input("niche", "finance");
        form.set_input("audience", "students");
        assert!(!form.is_complete());

        form.set_input("goal", "followers");
        assert!(form.is_complete());
    }

    #[test]
    fn test_whitespace_only_is_incomplete() {
        let mut form = filled_reels();
        form.set_input("audience", "   \t");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_undeclared_inputs_are_ignored() {
        let mut form = FormState::for_prompt("bio").unwrap();
        assert!(!form.set_input("slides", "7"));
        assert_eq!(form.value("slides"), "");
        assert!(form.to_request().inputs.is_empty());
    }

    #[test]
    fn test_select_prompt_resets_everything() {
        let mut form = filled_reels();
        form.set_tone(Tone::Serious);
        form.set_results(GenerationResult {
            neutral: "n".to_string(),
            fun: "f".to_string(),
            serious: "s".to_string(),
        });

        form.select_prompt("hooks").unwrap();

        assert_eq!(form.prompt().id, "hooks");
        assert_eq!(form.value("niche"), "");
        assert_eq!(form.tone(), Tone::Neutral);
        assert!(form.results().is_none());
    }

    #[test]
    fn test_select_unknown_prompt_keeps_state() {
        let mut form = filled_reels();
        let err = form.select_prompt("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(form.prompt().id, "reels");
        assert_eq!(form.value("niche"), "finance");
    }

    #[test]
    fn test_tone_survives_new_results() {
        let mut form = filled_reels();
        form.set_tone(Tone::Fun);
        form.set_results(GenerationResult::default());
        assert_eq!(form.tone(), Tone::Fun);
    }

    #[test]
    fn test_error_shows_in_neutral_only() {
        let mut form = filled_reels();
        form.set_error("Failed to generate content");
        let results = form.results().unwrap();
        assert_eq!(results.neutral, "Error: Failed to generate content");
        assert!(results.fun.is_empty());
        assert!(results.serious.is_empty());
    }

    #[test]
    fn test_to_request() {
        let request = filled_reels().to_request();
        assert_eq!(request.prompt_id, "reels");
        assert_eq!(request.inputs.len(), 3);
        assert_eq!(request.inputs["goal"], "followers");
    }
}
