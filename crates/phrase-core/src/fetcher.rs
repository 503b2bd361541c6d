//! Preview Fetcher
//!
//! Asks the text-generation provider for one short French phrase and its
//! translation, constrained to the [`PreviewPhrase`] JSON shape.

use std::sync::Arc;

use crate::error::{PreviewError, Result};
use crate::message::Message;
use crate::phrase::PreviewPhrase;
use crate::provider::{GenerationOptions, GenerationRequest, LlmProvider};

/// Instruction sent on every preview request
pub const DEFAULT_PROMPT: &str = r#"Дай одну короткую, живую французскую фразу и её перевод. Верни JSON: {"phrase": "...", "translation": "..."}"#;

/// Fetcher configuration
#[derive(Clone, Debug)]
pub struct FetcherConfig {
    /// Natural-language instruction
    pub prompt: String,

    /// Generation options
    pub generation: GenerationOptions,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.into(),
            generation: GenerationOptions::default(),
        }
    }
}

/// Fetches preview phrases through an injected provider
#[derive(Clone)]
pub struct PreviewFetcher {
    provider: Arc<dyn LlmProvider>,
    config: FetcherConfig,
}

impl PreviewFetcher {
    /// Create a new fetcher
    pub fn new(provider: Arc<dyn LlmProvider>, config: FetcherConfig) -> Self {
        Self { provider, config }
    }

    /// Create with the default prompt and model
    pub fn with_defaults(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new(provider, FetcherConfig::default())
    }

    pub const fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Build the provider request for one preview
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            vec![Message::user(self.config.prompt.clone())],
            self.config.generation.clone(),
        )
        .with_response_schema(PreviewPhrase::response_schema())
    }

    /// Fetch one phrase.
    ///
    /// Every failure comes back as `Err`; callers decide how loudly to
    /// report it.
    pub async fn fetch(&self) -> Result<PreviewPhrase> {
        let request = self.request();
        tracing::debug!(model = %request.options.model, "Requesting preview phrase");

        let completion = self.provider.complete(&request).await?;
        let stopped_early = completion.finish_reason.filter(|r| r.is_abnormal());
        if let Some(reason) = stopped_early {
            tracing::warn!(
                %reason,
                has_text = completion.text.is_some(),
                "Provider stopped early"
            );
        } else if completion.text.is_none() {
            tracing::debug!("Provider returned no text; parsing empty object");
        }

        let phrase = PreviewPhrase::from_completion_text(completion.text.as_deref()).map_err(|e| {
            match (e, stopped_early) {
                (PreviewError::Malformed(msg), Some(reason)) => {
                    PreviewError::Malformed(format!("{msg} (finish reason: {reason})"))
                }
                (e, _) => e,
            }
        })?;
        tracing::info!(phrase = %phrase.phrase, "Preview phrase generated");
        Ok(phrase)
    }
}
