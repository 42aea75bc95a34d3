use crate::core::config::ScoutConfig;
use crate::scoring::ScoringEngine;
use crate::scraping::{HttpFetcher, PageFetcher};
use std::sync::Arc;

/// Per-process state shared by every request. Nothing in here is mutated
/// after startup; each analysis is independent of every other.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    pub engine: ScoringEngine,
    pub config: Arc<ScoutConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub fn new(config: ScoutConfig) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(config.resolve_fetch_timeout(), config.resolve_user_agent())?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            engine: ScoringEngine::default(),
            config: Arc::new(config),
        })
    }

    /// Replaces the fetcher, e.g. with a canned one in tests.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }
}
