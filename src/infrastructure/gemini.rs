//! Blocking client for the Gemini `generateContent` endpoint.
//!
//! One request is made per submission, from a worker thread, so the client
//! uses reqwest's blocking API and builds its HTTP client per call. Errors
//! here never reach the applicant; the domain layer maps them to a fallback
//! message.

use crate::domain::{GeneratorError, GeneratorResult, TextModel};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Configuration for the text-generation call.
///
/// Defaults mirror the production form: a preview flash model, a 200-token
/// output bound with the thinking budget that bound requires, and a 0.7
/// sampling temperature. The API key comes from `GEMINI_API_KEY`; when it is
/// absent every call fails and the caller falls back to a static message.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub thinking_budget: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: "gemini-3-flash-preview".to_string(),
            max_output_tokens: 200,
            thinking_budget: 100,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    // Required by the API whenever max_output_tokens is set on this model family.
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeneratorConfig,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::default())
    }

    fn build_request_body(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
                thinking_config: ThinkingConfig {
                    thinking_budget: self.config.thinking_budget,
                },
            },
        }
    }

    fn send_request(&self, prompt: &str) -> GeneratorResult<String> {
        if self.config.api_key.is_empty() {
            return Err(GeneratorError::MissingApiKey);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .build()
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let url = format!(
            "{}/{}:generateContent?key={}",
            BASE_URL, self.config.model, self.config.api_key
        );

        debug!(
            "Sending generateContent request to {}",
            url.replace(&self.config.api_key, "***")
        );

        let response = client
            .post(&url)
            .json(&self.build_request_body(prompt))
            .send()
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        debug!("generateContent response status: {}", status);

        if !status.is_success() {
            error!("Gemini API error: {} - {}", status, body);
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TextModel for GeminiClient {
    fn generate_text(&self, prompt: &str) -> GeneratorResult<String> {
        self.send_request(prompt)
    }
}

/// Extracts the response text the way the hosted SDKs do: the concatenated
/// text parts of the first candidate, or the empty string when the response
/// carries no candidate or no parts. An empty string is a successful
/// response, not an error.
fn parse_response(body: &str) -> GeneratorResult<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            api_key: "test-key".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            max_output_tokens: 200,
            thinking_budget: 100,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_default_config_generation_parameters() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.max_output_tokens, 200);
        assert_eq!(config.thinking_budget, 100);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_missing_api_key_fails_without_network() {
        let mut config = test_config();
        config.api_key = String::new();
        let client = GeminiClient::new(config);

        assert_eq!(
            client.generate_text("hello").unwrap_err(),
            GeneratorError::MissingApiKey
        );
    }

    #[test]
    fn test_request_body_wire_format() {
        let client = GeminiClient::new(test_config());
        let body = serde_json::to_value(client.build_request_body("say hi")).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "say hi");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 200);
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 100);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_parse_response_extracts_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Great fit, "}, {"text": "Rahul!"}]}}
            ]
        }"#;

        assert_eq!(parse_response(body).unwrap(), "Great fit, Rahul!");
    }

    #[test]
    fn test_parse_response_without_candidates_is_empty_success() {
        assert_eq!(parse_response(r#"{"candidates": []}"#).unwrap(), "");
        assert_eq!(parse_response("{}").unwrap(), "");
    }

    #[test]
    fn test_parse_response_without_parts_is_empty_success() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "");

        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        assert_eq!(parse_response(body).unwrap(), "");
    }

    #[test]
    fn test_parse_response_rejects_malformed_json() {
        assert!(matches!(
            parse_response("not json"),
            Err(GeneratorError::InvalidResponse(_))
        ));
    }
}
