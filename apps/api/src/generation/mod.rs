// Content generation: tone definitions, prompt assembly, the single completion
// call and parsing of its three tone sections.
// All LLM calls go through llm_client.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod sections;
pub mod tone;
