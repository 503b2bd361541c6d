//! Error Types

use thiserror::Error;

/// Result type alias for preview operations
pub type Result<T> = std::result::Result<T, PreviewError>;

/// Everything that can go wrong while fetching a preview phrase.
///
/// All variants collapse into a single silent failure on the page; the
/// distinction only matters for logs and for the server's JSON error body.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Transport-level failure talking to the provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider answered with a non-success status
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Authentication failed (missing or rejected API key)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Response text was not valid JSON or did not match the phrase shape
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Payload parsed but broke an invariant (e.g. blank field)
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PreviewError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(_) | Self::ProviderUnavailable(_) => {
                "The phrase service is currently unavailable.".into()
            }
            Self::Status { status, .. } => format!("The phrase service answered with status {status}."),
            Self::Auth(_) => "The phrase service rejected our credentials.".into(),
            Self::RateLimited(_) => "Too many preview requests. Please wait a moment.".into(),
            Self::Malformed(_) | Self::SchemaViolation(_) => {
                "The phrase service returned an unexpected answer.".into()
            }
            Self::Config(_) => "The phrase service is not configured.".into(),
        }
    }
}
