use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion client. Production uses `OpenAiClient`; tests
    /// substitute a stub.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
