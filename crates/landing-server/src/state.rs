//! Application State

use std::sync::Arc;

use phrase_core::{LlmProvider, PreviewFetcher};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Text-generation provider, built once at startup
    pub provider: Arc<dyn LlmProvider>,

    /// Preview fetcher wired to `provider`
    pub fetcher: PreviewFetcher,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>, fetcher: PreviewFetcher) -> Self {
        Self { provider, fetcher }
    }
}
