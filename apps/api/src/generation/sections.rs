//! Section parser — splits raw model output into the three tone sections.
//!
//! Missing markers are expected, not exceptional: a tone whose marker is absent
//! falls back to the entire raw text so the user always sees something.

use serde::{Deserialize, Serialize};

use crate::generation::tone::Tone;

/// Generated content for each tone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub neutral: String,
    pub fun: String,
    pub serious: String,
}

impl GenerationResult {
    pub fn get(&self, tone: Tone) -> &str {
        match tone {
            Tone::Neutral => &self.neutral,
            Tone::Fun => &self.fun,
            Tone::Serious => &self.serious,
        }
    }
}

/// Text after `tone`'s marker up to the next tone's marker (or end of text), trimmed.
/// `None` when the marker does not appear at all.
pub fn extract_section(raw: &str, tone: Tone) -> Option<&str> {
    let marker = tone.marker();
    let start = raw.find(marker)? + marker.len();
    let rest = &raw[start..];

    let end = tone
        .next()
        .and_then(|next| rest.find(next.marker()))
        .unwrap_or(rest.len());

    Some(rest[..end].trim())
}

/// Parses all three tones, substituting the full raw text for any missing section.
pub fn parse_sections(raw: &str) -> GenerationResult {
    let section = |tone| extract_section(raw, tone).unwrap_or(raw).to_string();

    GenerationResult {
        neutral: section(Tone::Neutral),
        fun: section(Tone::Fun),
        serious: section(Tone::Serious),
    }
}
