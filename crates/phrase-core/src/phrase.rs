//! Preview Phrase
//!
//! The example sentence + translation pair shown under the preview button.

use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, Result};
use crate::provider::ResponseSchema;

/// Text parsed when the provider returns no text part at all
pub const EMPTY_PAYLOAD: &str = "{}";

/// A French phrase and its translation.
///
/// Both fields are always present; a payload missing either one never
/// becomes a `PreviewPhrase`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewPhrase {
    pub phrase: String,
    pub translation: String,
}

impl PreviewPhrase {
    pub fn new(phrase: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            translation: translation.into(),
        }
    }

    /// Structured-output constraint sent with every preview request
    pub fn response_schema() -> ResponseSchema {
        ResponseSchema::object()
            .required_property("phrase", ResponseSchema::string())
            .required_property("translation", ResponseSchema::string())
    }

    /// Parse provider output; `None` is treated as an empty object.
    pub fn from_completion_text(text: Option<&str>) -> Result<Self> {
        Self::from_json(text.unwrap_or(EMPTY_PAYLOAD))
    }

    /// Parse and validate a JSON payload
    pub fn from_json(text: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(text.trim())
            .map_err(|e| PreviewError::Malformed(e.to_string()))?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<()> {
        if self.phrase.trim().is_empty() {
            return Err(PreviewError::SchemaViolation("phrase is blank".into()));
        }
        if self.translation.trim().is_empty() {
            return Err(PreviewError::SchemaViolation("translation is blank".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let phrase =
            PreviewPhrase::from_json(r#"{"phrase": "Ça roule?", "translation": "How's it going?"}"#)
                .unwrap();
        assert_eq!(phrase.phrase, "Ça roule?");
        assert_eq!(phrase.translation, "How's it going?");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = PreviewPhrase::from_json(r#"{"phrase": "Bonjour"}"#).unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = PreviewPhrase::from_json("phrase: Bonjour").unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(_)));
    }

    #[test]
    fn test_missing_text_falls_back_to_empty_object() {
        let err = PreviewPhrase::from_completion_text(None).unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(ref m) if m.contains("missing field")));
    }

    #[test]
    fn test_extra_fields_rejected() {
        let err = PreviewPhrase::from_json(
            r#"{"phrase": "Salut", "translation": "Привет", "note": "informal"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(_)));
    }

    #[test]
    fn test_non_string_field_rejected() {
        let err = PreviewPhrase::from_json(r#"{"phrase": 42, "translation": "сорок два"}"#)
            .unwrap_err();
        assert!(matches!(err, PreviewError::Malformed(_)));
    }

    #[test]
    fn test_blank_field_rejected() {
        let err = PreviewPhrase::from_json(r#"{"phrase": "  ", "translation": "пусто"}"#)
            .unwrap_err();
        assert!(matches!(err, PreviewError::SchemaViolation(_)));
    }

    #[test]
    fn test_schema_requires_both_fields() {
        let schema = PreviewPhrase::response_schema();
        assert_eq!(schema.required, vec!["phrase", "translation"]);
        assert_eq!(schema.properties.len(), 2);
    }
}
