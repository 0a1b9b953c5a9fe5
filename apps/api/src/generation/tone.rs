//! Tones — the three stylistic variants generated for every prompt.
//!
//! Each tone owns its output marker; the instruction block and the section
//! parser both read it from here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Fun,
    Serious,
}

impl Tone {
    /// All tones in the order the model is asked to emit them.
    pub const ALL: [Tone; 3] = [Tone::Neutral, Tone::Fun, Tone::Serious];

    /// Literal delimiter that opens this tone's section in model output.
    pub fn marker(self) -> &'static str {
        match self {
            Tone::Neutral => "===NEUTRAL===",
            Tone::Fun => "===FUN===",
            Tone::Serious => "===SERIOUS===",
        }
    }

    /// Lowercase id used in JSON and form values.
    pub fn id(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Fun => "fun",
            Tone::Serious => "serious",
        }
    }

    pub fn from_id(id: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Fun => "Fun",
            Tone::Serious => "Serious",
        }
    }

    /// Placeholder describing the section content in the instruction block.
    pub fn section_hint(self) -> &'static str {
        match self {
            Tone::Neutral => "Content in a balanced, professional tone",
            Tone::Fun => "Content in a playful, energetic, friendly tone with personality",
            Tone::Serious => "Content in a professional, authoritative, direct tone",
        }
    }

    /// Tooltip text for the tone toggle. Neutral has none.
    pub fn modifier(self) -> &'static str {
        match self {
            Tone::Neutral => "",
            Tone::Fun => "Use a playful, energetic, and friendly tone with personality.",
            Tone::Serious => "Use a professional, authoritative, and direct tone.",
        }
    }

    /// The marker that closes this tone's section, if any.
    pub fn next(self) -> Option<Tone> {
        match self {
            Tone::Neutral => Some(Tone::Fun),
            Tone::Fun => Some(Tone::Serious),
            Tone::Serious => None,
        }
    }
}

/// Builds the fixed block appended to every prompt asking for all three sections.
pub fn tone_format_instruction() -> String {
    let sections = Tone::ALL
        .iter()
        .map(|t| format!("{}\n[{}]", t.marker(), t.section_hint()))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Generate this content in {} different tones. Format your response EXACTLY like this:\n\n{}",
        Tone::ALL.len(),
        sections
    )
}
