use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-user data: the credential travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient`; tests swap in a stub.
    pub completion: Arc<dyn CompletionService>,
}
