use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume and analysis persistence. `PgStore` in production.
    pub store: Arc<dyn ResumeStore>,
    /// Chat-completion gateway. `LlmClient` in production.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
