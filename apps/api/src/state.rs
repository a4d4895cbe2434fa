use std::sync::Arc;

use crate::llm_client::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-completion backend. `GeminiClient` in production, a mock in tests.
    pub llm: Arc<dyn InferenceClient>,
}
