// src/message.rs
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::error::GenerationError;

#[derive(Debug, Default, Deserialize)]
pub struct DescriptionRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub description: Option<String>,
}

/// Serializes as `{"generatedDescription": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionOutcome {
    #[serde(rename = "generatedDescription")]
    Generated(String),
    #[serde(rename = "error")]
    Failed(String),
}

impl From<Result<String, GenerationError>> for DescriptionOutcome {
    fn from(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => DescriptionOutcome::Generated(text),
            Err(err) => DescriptionOutcome::Failed(format!("Failed to generate description: {err}")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Accepts strings, numbers and booleans as text; `null` is absent.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected a string, found {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_uses_single_key() {
        let ok = DescriptionOutcome::Generated("text".into());
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"generatedDescription": "text"}));

        let failed = DescriptionOutcome::from(Err(GenerationError::TitleTooLong { limit: 5 }));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"error": "Failed to generate description: title exceeds 5 characters"})
        );
    }

    #[test]
    fn request_fields_are_optional() {
        let req: DescriptionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none() && req.description.is_none());

        let req: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn scalar_fields_are_read_as_text() {
        let req: DescriptionRequest =
            serde_json::from_str(r#"{"title": 123, "description": true}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("123"));
        assert_eq!(req.description.as_deref(), Some("true"));

        let req: ChatRequest = serde_json::from_str(r#"{"message": 4.5}"#).unwrap();
        assert_eq!(req.message.as_deref(), Some("4.5"));
    }

    #[test]
    fn structured_fields_are_rejected() {
        assert!(serde_json::from_str::<DescriptionRequest>(r#"{"title": ["steel"]}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message": {"text": "hi"}}"#).is_err());
    }
}
