//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for text-generation backends so the preview
//! fetcher can work with Gemini today and anything else tomorrow.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use phrase_core::provider::{GenerationRequest, LlmProvider};
//!
//! let provider = GeminiProvider::from_env()?;
//! let completion = provider.complete(&request).await?;
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gemini-3-flash-preview")
    pub model: String,

    /// Temperature for sampling; `None` leaves the provider default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate; `None` leaves the provider default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Model the landing page was built against
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// JSON value kinds a response schema can constrain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// Structured-output constraint attached to a request.
///
/// A small subset of JSON Schema; providers translate it into their own
/// dialect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    pub const fn string() -> Self {
        Self {
            schema_type: SchemaType::String,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub const fn object() -> Self {
        Self {
            schema_type: SchemaType::Object,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a required property (object schemas only)
    #[must_use]
    pub fn required_property(mut self, name: impl Into<String>, schema: Self) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.insert(name, schema);
        self
    }
}

/// One generation call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub messages: Vec<Message>,

    pub options: GenerationOptions,

    /// When set, the provider must answer with JSON matching this schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<ResponseSchema>,
}

impl GenerationRequest {
    pub fn new(messages: Vec<Message>, options: GenerationOptions) -> Self {
        Self {
            messages,
            options,
            response_schema: None,
        }
    }

    #[must_use]
    pub fn with_response_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text; `None` when the provider returned no text part
    pub text: Option<String>,

    /// Finish reason
    pub finish_reason: Option<FinishReason>,
}

/// Reason for completion finishing
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Output was cut off or blocked, so the text is likely unusable
    pub const fn is_abnormal(self) -> bool {
        matches!(self, Self::Length | Self::ContentFilter)
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Length => write!(f, "length"),
            Self::ContentFilter => write!(f, "content_filter"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Provider metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "Gemini")
    pub name: String,

    /// Whether an API key was supplied (not whether it is valid)
    pub credentials_present: bool,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new LLM backends.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get provider information and capabilities
    fn info(&self) -> ProviderInfo;

    /// Generate a completion
    async fn complete(&self, request: &GenerationRequest) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.model, "gemini-3-flash-preview");
        assert!(opts.temperature.is_none());
        assert!(opts.max_tokens.is_none());
    }

    #[test]
    fn test_response_schema_serialization() {
        let schema = ResponseSchema::object()
            .required_property("phrase", ResponseSchema::string())
            .required_property("translation", ResponseSchema::string());

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["phrase"]["type"], "string");
        assert_eq!(value["required"], serde_json::json!(["phrase", "translation"]));
        assert!(value["properties"]["phrase"].get("required").is_none());
    }

    #[test]
    fn test_abnormal_finish_reasons() {
        assert!(FinishReason::Length.is_abnormal());
        assert!(FinishReason::ContentFilter.is_abnormal());
        assert!(!FinishReason::Stop.is_abnormal());
        assert_eq!(FinishReason::ContentFilter.to_string(), "content_filter");
    }
}
