pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod presentation;
pub mod prompts;
pub mod routes;
pub mod state;
