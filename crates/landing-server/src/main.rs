//! Je Parle! landing server
//!
//! Serves the Leptos frontend and proxies the preview-phrase request to the
//! text-generation provider so the API key never reaches the browser.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phrase_core::{
    fetcher::FetcherConfig,
    provider::GenerationOptions,
    LlmProvider, PreviewFetcher,
};
use phrase_runtime::GeminiProvider;

use crate::config::ServerConfig;
use crate::handlers::{health_check, preview_handler};
use crate::state::AppState;

/// Build the application router
fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/preview", post(preview_handler))
        // Static files (WASM frontend + images)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // One provider for the whole process, shared read-only
    let gemini = GeminiProvider::from_env()?;
    if gemini.config().has_api_key() {
        tracing::info!("✓ Gemini API key configured");
    } else {
        tracing::warn!("⚠ GEMINI_API_KEY not set - preview requests will fail");
    }

    let fetcher_config = FetcherConfig {
        generation: GenerationOptions {
            model: gemini.config().model.clone(),
            ..Default::default()
        },
        ..Default::default()
    };
    tracing::info!("  Model: {}", fetcher_config.generation.model);

    let provider: Arc<dyn LlmProvider> = Arc::new(gemini);
    let fetcher = PreviewFetcher::new(provider.clone(), fetcher_config);
    let state = AppState::new(provider, fetcher);

    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 je-parle landing running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/preview  - Generate a preview phrase");
    tracing::info!("  GET  /*            - Static files from {}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use phrase_core::{
        provider::{Completion, FinishReason, GenerationRequest, ProviderInfo},
        PreviewError,
    };

    use super::*;

    struct FixedProvider(Option<&'static str>);

    #[async_trait]
    impl LlmProvider for FixedProvider {
        fn info(&self) -> ProviderInfo {
            ProviderInfo {
                name: "Fixed".into(),
                credentials_present: false,
            }
        }

        async fn complete(&self, _request: &GenerationRequest) -> phrase_core::Result<Completion> {
            let text = self
                .0
                .ok_or_else(|| PreviewError::ProviderUnavailable("offline".into()))?;
            Ok(Completion {
                text: Some(text.into()),
                finish_reason: Some(FinishReason::Stop),
            })
        }
    }

    fn app(answer: Option<&'static str>) -> Router {
        let provider: Arc<dyn LlmProvider> = Arc::new(FixedProvider(answer));
        let fetcher = PreviewFetcher::with_defaults(provider.clone());
        router(AppState::new(provider, fetcher), "static")
    }

    async fn post_preview(app: Router) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/preview")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_preview_success() {
        let (status, body) = post_preview(app(Some(
            r#"{"phrase": "Ça roule?", "translation": "How's it going?"}"#,
        )))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phrase"], "Ça roule?");
        assert_eq!(body["translation"], "How's it going?");
    }

    #[tokio::test]
    async fn test_preview_malformed_payload() {
        let (status, body) = post_preview(app(Some(r#"{"phrase": "Bonjour"}"#))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "PREVIEW_FAILED");
        assert!(body.get("phrase").is_none());
    }

    #[tokio::test]
    async fn test_preview_provider_down() {
        let (status, body) = post_preview(app(None)).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "PREVIEW_FAILED");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["provider"], "Fixed");
        assert_eq!(body["model"], "gemini-3-flash-preview");
        assert_eq!(body["api_key_configured"], false);
    }
}
