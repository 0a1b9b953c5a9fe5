//! Prompt Registry — the fixed catalog of content templates.
//!
//! Pure data. `lookup` resolves an id; `ordered` yields the catalog in display
//! order, which is defined by `PROMPT_ORDER` and never by table iteration.

use serde::Serialize;

mod catalog;

pub use catalog::PROMPT_ORDER;

/// How a form control for an input is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Select,
    Number,
}

/// One labeled input of a prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptInput {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: InputKind,
    /// Present only for `InputKind::Select`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// A content-generation template and the inputs it asks for.
#[derive(Debug, Clone, Serialize)]
pub struct PromptConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: &'static [PromptInput],
    pub template: &'static str,
}

impl PromptConfig {
    /// The declared input with the given id, if any.
    pub fn input(&self, id: &str) -> Option<&PromptInput> {
        self.inputs.iter().find(|i| i.id == id)
    }
}

/// Resolves a prompt id against the catalog.
pub fn lookup(prompt_id: &str) -> Option<&'static PromptConfig> {
    catalog::PROMPTS.iter().find(|p| p.id == prompt_id)
}

/// Every prompt in display order.
pub fn ordered() -> impl Iterator<Item = &'static PromptConfig> {
    PROMPT_ORDER.iter().filter_map(|id| lookup(id))
}

/// The prompt shown when no prompt has been chosen yet.
pub fn default_prompt() -> &'static PromptConfig {
    ordered()
        .next()
        .unwrap_or(&catalog::PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_known_id_resolves_to_itself() {
        for id in PROMPT_ORDER {
            let config = lookup(id).unwrap_or_else(|| panic!("{id} missing from catalog"));
            assert_eq!(config.id, *id);
            assert!(!config.inputs.is_empty(), "{id} has no inputs");
            assert!(!config.template.is_empty(), "{id} has no template");
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        assert!(lookup("tiktok").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("BIO").is_none());
    }

    #[test]
    fn test_catalog_has_nine_prompts_in_display_order() {
        let ids: Vec<&str> = ordered().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "bio",
                "reels",
                "hooks",
                "captions",
                "carousels",
                "outreach",
                "growth",
                "monetization",
                "workflow"
            ]
        );
        assert_eq!(catalog::PROMPTS.len(), PROMPT_ORDER.len());
    }

    #[test]
    fn test_ids_are_unique() {
        let prompt_ids: HashSet<&str> = catalog::PROMPTS.iter().map(|p| p.id).collect();
        assert_eq!(prompt_ids.len(), catalog::PROMPTS.len());

        for prompt in catalog::PROMPTS {
            let input_ids: HashSet<&str> = prompt.inputs.iter().map(|i| i.id).collect();
            assert_eq!(input_ids.len(), prompt.inputs.len(), "{} repeats an input id", prompt.id);
        }
    }

    #[test]
    fn test_options_only_on_select_inputs() {
        for prompt in catalog::PROMPTS {
            for input in prompt.inputs {
                match input.kind {
                    InputKind::Select => assert!(
                        input.options.is_some_and(|o| !o.is_empty()),
                        "{}.{} select without options",
                        prompt.id,
                        input.id
                    ),
                    _ => assert!(input.options.is_none()),
                }
            }
        }
    }

    #[test]
    fn test_bio_labels() {
        let bio = lookup("bio").unwrap();
        assert_eq!(bio.input("niche").unwrap().label, "Niche/Topic");
        assert_eq!(bio.input("audience").unwrap().label, "Audience");
        assert!(bio.input("slides").is_none());
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let reels = serde_json::to_value(lookup("reels").unwrap()).unwrap();
        assert_eq!(reels["inputs"][0]["type"], "text");
        assert_eq!(reels["inputs"][2]["type"], "select");
        assert_eq!(reels["inputs"][2]["options"][0], "followers");
        assert!(reels["inputs"][2].get("placeholder").is_none());
    }

    #[test]
    fn test_default_prompt_is_bio() {
        assert_eq!(default_prompt().id, "bio");
    }
}
