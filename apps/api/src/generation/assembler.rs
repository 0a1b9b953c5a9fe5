//! Prompt Assembler — turns a prompt config plus user inputs into the user message.

use std::collections::BTreeMap;

use crate::generation::tone::tone_format_instruction;
use crate::prompts::PromptConfig;

/// Builds `"<label>: <value>"` lines for every input the config declares,
/// followed by the template and the three-tone instruction block.
///
/// Keys the config does not declare are dropped silently.
pub fn assemble(config: &PromptConfig, inputs: &BTreeMap<String, String>) -> String {
    let input_context = inputs
        .iter()
        .filter_map(|(key, value)| {
            config
                .input(key)
                .map(|input| format!("{}: {}", input.label, value))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\n{}",
        input_context,
        config.template,
        tone_format_instruction()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::lookup;

    fn inputs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bio_prompt_contains_labels_template_and_markers() {
        let bio = lookup("bio").unwrap();
        let prompt = assemble(
            bio,
            &inputs(&[("niche", "fitness"), ("audience", "busy pros")]),
        );

        let lines: Vec<&str> = prompt.lines().collect();
        assert!(lines.contains(&"Niche/Topic: fitness"));
        assert!(lines.contains(&"Audience: busy pros"));
        assert!(prompt.contains(bio.template));
        for marker in ["===NEUTRAL===", "===FUN===", "===SERIOUS==="] {
            assert!(prompt.contains(marker), "missing {marker}");
        }
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let bio = lookup("bio").unwrap();
        let prompt = assemble(
            bio,
            &inputs(&[("niche", "fitness"), ("slides", "12"), ("__proto__", "x")]),
        );

        assert!(prompt.contains("Niche/Topic: fitness"));
        assert!(!prompt.contains("12"));
        assert!(!prompt.contains("slides"));
        assert!(!prompt.contains("__proto__"));
    }

    #[test]
    fn test_layout_is_inputs_then_template_then_instructions() {
        let hooks = lookup("hooks").unwrap();
        let prompt = assemble(hooks, &inputs(&[("problem", "acne")]));

        let expected_start = format!(
            "One problem your audience struggles with: acne\n\n{}\n\n",
            hooks.template
        );
        assert!(prompt.starts_with(&expected_start));
        assert!(prompt.ends_with(&tone_format_instruction()));
    }

    #[test]
    fn test_empty_inputs_still_carry_template() {
        let growth = lookup("growth").unwrap();
        let prompt = assemble(growth, &BTreeMap::new());
        assert!(prompt.starts_with("\n\n"));
        assert!(prompt.contains(growth.template));
    }

    #[test]
    fn test_value_is_passed_through_verbatim() {
        let carousels = lookup("carousels").unwrap();
        let prompt = assemble(carousels, &inputs(&[("slides", " 7 ")]));
        assert!(prompt.contains("Number of slides:  7 "));
    }
}
