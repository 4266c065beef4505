use std::sync::Arc;

use crate::config::Config;
use crate::gdocs::fetcher::DocFetcher;
use crate::github::GithubClient;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
    pub llm: LlmClient,
    /// Pluggable document fetcher. Production: `GoogleDocsFetcher`; tests swap
    /// in a canned implementation.
    pub fetcher: Arc<dyn DocFetcher>,
    #[allow(dead_code)]
    pub config: Config,
}
