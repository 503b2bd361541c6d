//! Gemini LLM Provider
//!
//! Implementation of `LlmProvider` over the Gemini `generateContent` REST
//! endpoint, with structured JSON output.

use std::collections::BTreeMap;

use async_trait::async_trait;
use phrase_core::{
    error::{PreviewError, Result},
    message::Role,
    provider::{
        Completion, FinishReason, GenerationRequest, LlmProvider, ProviderInfo, ResponseSchema,
        SchemaType, DEFAULT_MODEL,
    },
};
use serde::{Deserialize, Serialize};

/// Gemini provider configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key; may be empty, in which case the first call fails
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Default model
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .unwrap_or_default();
        let base_url = std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url);
        let model = std::env::var("GEMINI_MODEL").unwrap_or(defaults.model);

        Self {
            api_key,
            base_url,
            model,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<GeminiSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini's OpenAPI-style schema dialect (upper-case type names)
#[derive(Debug, Serialize, Deserialize)]
struct GeminiSchema {
    #[serde(rename = "type")]
    schema_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, GeminiSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
}

impl From<&ResponseSchema> for GeminiSchema {
    fn from(schema: &ResponseSchema) -> Self {
        let schema_type = match schema.schema_type {
            SchemaType::String => "STRING",
            SchemaType::Number => "NUMBER",
            SchemaType::Integer => "INTEGER",
            SchemaType::Boolean => "BOOLEAN",
            SchemaType::Array => "ARRAY",
            SchemaType::Object => "OBJECT",
        };
        Self {
            schema_type: schema_type.into(),
            properties: schema
                .properties
                .iter()
                .map(|(name, prop)| (name.clone(), Self::from(prop)))
                .collect(),
            required: schema.required.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

// ============================================================================
// Provider
// ============================================================================

/// Gemini LLM provider
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create from configuration. No overall request timeout is set.
    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PreviewError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(GeminiConfig::from_env())
    }

    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Convert a provider-agnostic request into the Gemini body
    fn build_body(request: &GenerationRequest) -> GenerateContentRequest {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in &request.messages {
            let part = Part {
                text: Some(message.content.clone()),
            };
            match message.role {
                Role::System => system_parts.push(part),
                Role::User | Role::Model => contents.push(Content {
                    role: Some(message.role.to_string()),
                    parts: vec![part],
                }),
            }
        }

        let system_instruction = (!system_parts.is_empty()).then(|| Content {
            role: None,
            parts: system_parts,
        });

        let generation_config = GenerationConfig {
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.response_schema.as_ref().map(GeminiSchema::from),
            temperature: request.options.temperature,
            max_output_tokens: request.options.max_tokens,
        };

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: Some(generation_config),
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let content = response.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    fn convert_completion(response: GenerateContentResponse) -> Completion {
        let finish_reason = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .map(|r| match r {
                "STOP" => FinishReason::Stop,
                "MAX_TOKENS" => FinishReason::Length,
                "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => {
                    FinishReason::ContentFilter
                }
                _ => FinishReason::Other,
            });

        Completion {
            text: Self::extract_text(&response),
            finish_reason,
        }
    }

    /// Map a non-success HTTP status to an error
    fn status_error(status: u16, body: String) -> PreviewError {
        match status {
            401 | 403 => PreviewError::Auth(body),
            429 => PreviewError::RateLimited(body),
            503 => PreviewError::ProviderUnavailable(body),
            _ => PreviewError::Status { status, body },
        }
    }

    fn transport_error(err: &reqwest::Error) -> PreviewError {
        if err.is_connect() || err.is_timeout() {
            PreviewError::ProviderUnavailable(err.to_string())
        } else {
            PreviewError::Provider(err.to_string())
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "Gemini".into(),
            credentials_present: self.config.has_api_key(),
        }
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<Completion> {
        let model = &request.options.model;
        let body = Self::build_body(request);

        let response = self
            .client
            .post(self.config.endpoint(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gemini request failed");
            return Err(Self::status_error(status.as_u16(), body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PreviewError::Provider(e.to_string()))?;

        Ok(Self::convert_completion(parsed))
    }
}
