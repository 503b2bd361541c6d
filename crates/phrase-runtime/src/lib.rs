//! # phrase-runtime
//!
//! Concrete text-generation providers for the landing page.
//!
//! ## Providers
//!
//! - **Gemini** (default): Google `generateContent` with JSON response schema
//!
//! ## Usage
//!
//! ```rust,ignore
//! use phrase_runtime::GeminiProvider;
//!
//! let provider = Arc::new(GeminiProvider::from_env()?);
//! let fetcher = PreviewFetcher::with_defaults(provider);
//! ```

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiConfig, GeminiProvider};

// Re-export core types for convenience
pub use phrase_core::{LlmProvider, PreviewError, PreviewFetcher, PreviewPhrase, Result};
