//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields the proxy and the prompt UI read are modelled. Everything
//! else in an upstream reply (`usageMetadata`, `modelVersion`, safety ratings)
//! is ignored here and relayed byte-for-byte via [`Generation::body`].

use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request: one content entry holding one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: Some(vec![Part {
                    text: Some(prompt.to_string()),
                }]),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Absent (or null) when the prompt was blocked; see `prompt_feedback`.
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Gemini omits `content` for candidates stopped by a safety filter.
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Validate an already-parsed JSON body against the expected shape.
    ///
    /// The top level must be an object; `candidates`, when present, must be an
    /// array of objects whose `content.parts` entries carry string `text`.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err(format!("expected a JSON object, got {}", json_kind(value)));
        }
        Self::deserialize(value).map_err(|e| e.to_string())
    }

    /// Candidates in upstream order; empty when absent or null.
    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_deref().unwrap_or_default()
    }

    /// `candidates[0].content.parts[0].text`, if every step exists.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates()
            .first()
            .and_then(Candidate::first_part)
            .and_then(|p| p.text.as_deref())
    }
}

impl Candidate {
    /// `content.parts[0]`; `None` when `content` or `parts` is missing or empty.
    pub fn first_part(&self) -> Option<&Part> {
        self.content
            .as_ref()
            .and_then(|c| c.parts.as_deref())
            .and_then(|parts| parts.first())
    }
}

/// An upstream reply: the exact bytes to relay plus their validated view.
#[derive(Debug, Clone)]
pub struct Generation {
    pub body: Bytes,
    pub response: GenerateContentResponse,
}

impl Generation {
    /// Parse and validate a raw upstream body, keeping the bytes untouched.
    pub fn from_bytes(body: Bytes) -> Result<Self, String> {
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| format!("invalid JSON: {}", e))?;
        let response = GenerateContentResponse::from_value(&value)?;
        Ok(Self { body, response })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
