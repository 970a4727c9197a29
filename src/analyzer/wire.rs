//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
    pub temperature: f64,
}

impl GenerateContentRequest {
    /// Request carrying `prompt`, constrained to schema-validated JSON
    /// output at low temperature.
    pub fn new(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                temperature: 0.2,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if the envelope carries one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// Output schema constraining the model to the `AnalysisResult` shape.
///
/// Field names and label sets must stay in sync with
/// [`crate::analysis::AnalysisResult`].
pub(crate) fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overall_strength": {
                "type": "STRING",
                "enum": ["Very Weak", "Weak", "Moderate", "Strong", "Very Strong"],
                "description": "A single rating for the password strength.",
            },
            "feedback": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Actionable suggestions to improve the password.",
            },
            "compromise_risk": {
                "type": "STRING",
                "enum": ["High", "Medium", "Low", "Very Low"],
                "description": "An assessment of how likely the password pattern is to appear in breached password lists.",
            },
            "common_patterns": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of any detected weak patterns, like keyboard sequences, repeated characters, common words, names, or dates.",
            },
        },
        "required": ["overall_strength", "feedback", "compromise_risk", "common_patterns"],
    })
}
