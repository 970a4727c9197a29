//! Remote password analysis via the Gemini API.
//!
//! Handles credential loading, request construction, and response
//! validation for the `generateContent` endpoint. Every call to
//! [`GeminiAnalyzer::analyze`] issues exactly one network request; there is
//! no retry, caching, or rate limiting at this layer.

mod prompt;
mod wire;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::analysis::AnalysisResult;
use prompt::build_prompt;
use wire::{GenerateContentRequest, GenerateContentResponse};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analyzer returned an invalid response: {0}")]
    Schema(String),
}

/// Client for the Gemini password analysis endpoint.
///
/// A missing credential is a construction failure, not a per-call error:
/// an analyzer that exists can always attempt a request.
#[derive(Debug, Clone)]
pub struct GeminiAnalyzer {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiAnalyzer {
    /// Creates an analyzer with the given API key.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Creates an analyzer from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MissingApiKey`] if the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self, AnalyzerError> {
        let key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AnalyzerError::MissingApiKey)?;

        #[cfg(feature = "tracing")]
        tracing::info!("analyzer credential loaded from {}", API_KEY_VAR);

        Ok(Self::new(SecretString::from(key)))
    }

    /// Overrides the endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model identifier (default: `gemini-2.5-flash`).
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Requests a qualitative analysis of `password`.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::Transport`] on connection or HTTP-status failure
    /// - [`AnalyzerError::Schema`] if the response does not match the
    ///   expected structure
    pub async fn analyze(&self, password: &SecretString) -> Result<AnalysisResult, AnalyzerError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest::new(build_prompt(password));

        #[cfg(feature = "tracing")]
        tracing::info!("requesting password analysis from {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_analysis(&body)
    }
}

/// Parses a `generateContent` response body into an [`AnalysisResult`].
///
/// The endpoint is asked for schema-validated JSON, so in the normal case
/// the candidate text parses directly; anything else is a schema failure.
fn parse_analysis(body: &str) -> Result<AnalysisResult, AnalyzerError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("malformed analysis envelope: {}", e);
        AnalyzerError::Schema(e.to_string())
    })?;

    let text = envelope
        .first_text()
        .ok_or_else(|| AnalyzerError::Schema("response contained no candidate text".to_string()))?;

    serde_json::from_str(text.trim()).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("analysis payload failed validation: {}", e);
        AnalyzerError::Schema(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CompromiseRisk, StrengthLabel};
    use serde_json::json;
    use serial_test::serial;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn envelope_with_text(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        remove_env(API_KEY_VAR);

        let result = GeminiAnalyzer::from_env();
        assert!(matches!(result, Err(AnalyzerError::MissingApiKey)));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key() {
        set_env(API_KEY_VAR, "");

        let result = GeminiAnalyzer::from_env();
        assert!(matches!(result, Err(AnalyzerError::MissingApiKey)));

        remove_env(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_with_key() {
        set_env(API_KEY_VAR, "test-key");

        let analyzer = GeminiAnalyzer::from_env().unwrap();
        assert_eq!(analyzer.model, DEFAULT_MODEL);
        assert_eq!(analyzer.base_url, DEFAULT_BASE_URL);

        remove_env(API_KEY_VAR);
    }

    #[test]
    fn test_parse_analysis_valid_payload() {
        let payload = json!({
            "overall_strength": "Moderate",
            "feedback": ["Make it longer."],
            "compromise_risk": "Medium",
            "common_patterns": ["Common word"]
        });
        let body = envelope_with_text(&payload.to_string()).to_string();

        let result = parse_analysis(&body).unwrap();
        assert_eq!(result.overall_strength, StrengthLabel::Moderate);
        assert_eq!(result.compromise_risk, CompromiseRisk::Medium);
    }

    #[test]
    fn test_parse_analysis_trims_candidate_text() {
        let payload = json!({
            "overall_strength": "Weak",
            "feedback": [],
            "compromise_risk": "High",
            "common_patterns": []
        });
        let body = envelope_with_text(&format!("\n  {}\n", payload)).to_string();

        assert!(parse_analysis(&body).is_ok());
    }

    #[test]
    fn test_parse_analysis_malformed_envelope() {
        let result = parse_analysis("not json at all");
        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[test]
    fn test_parse_analysis_no_candidates() {
        let result = parse_analysis(r#"{"candidates":[]}"#);
        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[test]
    fn test_parse_analysis_candidate_text_not_json() {
        let body = envelope_with_text("I am sorry, I cannot help with that.").to_string();
        let result = parse_analysis(&body);
        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[test]
    fn test_parse_analysis_out_of_enum_label() {
        let payload = json!({
            "overall_strength": "Legendary",
            "feedback": [],
            "compromise_risk": "Low",
            "common_patterns": []
        });
        let body = envelope_with_text(&payload.to_string()).to_string();

        let result = parse_analysis(&body);
        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let server = MockServer::start().await;
        let payload = json!({
            "overall_strength": "Strong",
            "feedback": ["Add more special characters."],
            "compromise_risk": "Low",
            "common_patterns": []
        });

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope_with_text(&payload.to_string())),
            )
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(secret("test-key")).with_base_url(server.uri());
        let result = analyzer.analyze(&secret("Abcdefg1!")).await.unwrap();

        assert_eq!(result.overall_strength, StrengthLabel::Strong);
        assert_eq!(result.compromise_risk, CompromiseRisk::Low);
        assert_eq!(result.feedback, vec!["Add more special characters."]);
        assert!(result.common_patterns.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_server_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(secret("test-key")).with_base_url(server.uri());
        let result = analyzer.analyze(&secret("Abcdefg1!")).await;

        assert!(matches!(result, Err(AnalyzerError::Transport(_))));
    }

    #[tokio::test]
    async fn test_analyze_unreachable_endpoint_is_transport() {
        let analyzer =
            GeminiAnalyzer::new(secret("test-key")).with_base_url("http://127.0.0.1:0");
        let result = analyzer.analyze(&secret("Abcdefg1!")).await;

        assert!(matches!(result, Err(AnalyzerError::Transport(_))));
    }

    #[tokio::test]
    async fn test_analyze_malformed_payload_is_schema() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope_with_text("not a json object")),
            )
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(secret("test-key")).with_base_url(server.uri());
        let result = analyzer.analyze(&secret("Abcdefg1!")).await;

        assert!(matches!(result, Err(AnalyzerError::Schema(_))));
    }

    #[tokio::test]
    async fn test_analyze_with_custom_model_hits_model_path() {
        let server = MockServer::start().await;
        let payload = json!({
            "overall_strength": "Very Strong",
            "feedback": [],
            "compromise_risk": "Very Low",
            "common_patterns": []
        });

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-pro:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope_with_text(&payload.to_string())),
            )
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(secret("test-key"))
            .with_base_url(server.uri())
            .with_model("gemini-2.0-pro");
        let result = analyzer.analyze(&secret("Abcdefg1!")).await.unwrap();

        assert_eq!(result.overall_strength, StrengthLabel::VeryStrong);
    }
}
