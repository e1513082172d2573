use std::sync::Arc;

use crate::analysis::confidence::ConfidencePenalties;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::storage::files::FileStore;
use crate::storage::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Persistence adapter boundary. Postgres in production; the in-memory
    /// implementation backs the engine and atomicity tests.
    pub store: Arc<dyn AnalysisStore>,
    /// Blob store for uploaded resume files.
    pub files: FileStore,
    /// Confidence-score penalty table. Policy, not a law of the domain.
    pub penalties: ConfidencePenalties,
}
