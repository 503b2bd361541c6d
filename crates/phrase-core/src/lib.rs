//! # phrase-core
//!
//! Provider-agnostic core of the "Je Parle!" landing page preview.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        LandingPage                            │
//! │  ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │
//! │  │ PreviewState │◀──│ PreviewFetcher │──▶│  LlmProvider   │  │
//! │  │  (idle/load) │   │ (schema+parse) │   │  (Strategy)    │  │
//! │  └──────┬───────┘   └────────────────┘   └────────────────┘  │
//! │         ▼                                                     │
//! │  view::render ──▶ LandingView                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait keeps the fetcher independent of the concrete
//! backend (Gemini in `phrase-runtime`).

pub mod content;
pub mod error;
pub mod fetcher;
pub mod message;
pub mod phrase;
pub mod provider;
pub mod state;
pub mod view;

pub use content::{ImageAsset, LandingContent, LANDING};
pub use error::{PreviewError, Result};
pub use fetcher::{FetcherConfig, PreviewFetcher};
pub use message::{Message, Role};
pub use phrase::PreviewPhrase;
pub use provider::LlmProvider;
pub use state::{FetchOutcome, FetchTicket, LoadingState, PreviewState};
pub use view::{render, LandingView, PreviewCard};
