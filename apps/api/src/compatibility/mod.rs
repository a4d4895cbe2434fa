// Medicine compatibility check.
// All LLM calls go through llm_client, no direct Gemini calls here.

pub mod checker;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod validation;
