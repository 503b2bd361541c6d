//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::Instrument;

use phrase_core::PreviewPhrase;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub model: String,
    pub api_key_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let info = state.provider.info();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: info.name,
        model: state.fetcher.config().generation.model.clone(),
        api_key_configured: info.credentials_present,
    })
}

/// Generate one preview phrase
pub async fn preview_handler(
    State(state): State<AppState>,
) -> Result<Json<PreviewPhrase>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("preview", %request_id);

    let phrase = state
        .fetcher
        .fetch()
        .instrument(span)
        .await
        .map_err(|e| {
            tracing::error!(%request_id, "Preview fetch failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.user_message(),
                    code: "PREVIEW_FAILED".into(),
                }),
            )
        })?;

    Ok(Json(phrase))
}
