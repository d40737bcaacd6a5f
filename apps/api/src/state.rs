use std::sync::Arc;

use crate::catalog::JobRecord;
use crate::config::Config;
use crate::matching::JobRanker;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Catalog used when a request does not bring its own.
    pub catalog: Arc<Vec<JobRecord>>,
    /// Pluggable ranker. Default: KeywordRanker. Swap via RANKER_BACKEND env.
    pub ranker: Arc<dyn JobRanker>,
}

impl AppState {
    pub fn new(config: Config, catalog: Vec<JobRecord>) -> Self {
        let ranker: Arc<dyn JobRanker> = Arc::from(config.ranker_backend.build());
        Self {
            config,
            catalog: Arc::new(catalog),
            ranker,
        }
    }
}
