use std::sync::Arc;

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalog is read-only after startup; scoring itself is
/// pure, so handlers need no locks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SkillCatalog>,
    pub llm: LlmClient,
    pub config: Config,
}
