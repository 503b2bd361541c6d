//! Preview State Machine
//!
//! ```text
//!            begin()                 finish(latest ticket, _)
//!   Idle ─────────────▶ Loading ─────────────────────────────▶ Idle
//!                        │  ▲
//!                begin() └──┘  (new ticket, older ones go stale)
//! ```
//!
//! The last successful phrase rides alongside the loading flag. Failures
//! leave it untouched; only the most recently dispatched fetch may end the
//! loading state or replace the phrase.

use serde::{Deserialize, Serialize};

use crate::error::PreviewError;
use crate::phrase::PreviewPhrase;

/// Whether a preview fetch is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
}

/// Identifies one dispatched fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// What `finish` did with a completion
#[derive(Debug)]
pub enum FetchOutcome {
    /// Phrase replaced, loading ended
    Updated,
    /// Phrase kept, loading ended; the caller reports the error
    Failed(PreviewError),
    /// A newer fetch was dispatched; nothing changed
    Stale,
}

/// Display state for the preview button and panel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    loading: LoadingState,
    phrase: Option<PreviewPhrase>,
    last_issued: u64,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn loading(&self) -> LoadingState {
        self.loading
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.loading, LoadingState::Loading)
    }

    pub const fn phrase(&self) -> Option<&PreviewPhrase> {
        self.phrase.as_ref()
    }

    /// Dispatch a fetch: enter `Loading` and hand out a fresh ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.last_issued += 1;
        self.loading = LoadingState::Loading;
        FetchTicket(self.last_issued)
    }

    /// Resolve a fetch. This is the single exit path for success and
    /// failure alike.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<PreviewPhrase, PreviewError>,
    ) -> FetchOutcome {
        if ticket.0 != self.last_issued {
            return FetchOutcome::Stale;
        }

        self.loading = LoadingState::Idle;
        match outcome {
            Ok(phrase) => {
                self.phrase = Some(phrase);
                FetchOutcome::Updated
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
