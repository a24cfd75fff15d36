use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ModelError, TextModel};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Generative Language `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads `SKILLDECK_API_KEY` and `SKILLDECK_MODEL`. A missing key is not
    /// an error at construction time; completions made without one fail with
    /// [`ModelError::Unconfigured`] before any request is sent.
    pub fn from_env() -> Self {
        let api_key = std::env::var("SKILLDECK_API_KEY").unwrap_or_default();
        let model =
            std::env::var("SKILLDECK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Points the client at a different host. Used by tests to stand in a
    /// local server for the real endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TextModel for GeminiModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        if self.api_key.is_empty() {
            return Err(ModelError::Unconfigured);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.model, "requesting completion");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Status {
                code: status.as_u16(),
            });
        }

        let payload: GenerateResponse = response.json().await?;
        let text = first_candidate_text(&payload);
        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Concatenates the text parts of the first candidate. The endpoint splits
/// long replies across parts, so a single part is the common case but not
/// the only one.
fn first_candidate_text(payload: &GenerateResponse) -> String {
    payload
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn response_text_is_extracted() {
        let payload = parse(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "parts": [{"text": "{\"answer\": 42}"}],
                            "role": "model"
                        },
                        "finishReason": "STOP"
                    }
                ],
                "modelVersion": "gemini-2.0-flash"
            }"#,
        );

        assert_eq!(first_candidate_text(&payload), "{\"answer\": 42}");
    }

    #[test]
    fn multi_part_candidates_are_joined() {
        let payload = parse(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}}
                ]
            }"#,
        );

        assert_eq!(first_candidate_text(&payload), "{\"a\": 1}");
    }

    #[test]
    fn only_the_first_candidate_counts() {
        let payload = parse(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "first"}]}},
                    {"content": {"parts": [{"text": "second"}]}}
                ]
            }"#,
        );

        assert_eq!(first_candidate_text(&payload), "first");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(first_candidate_text(&parse("{}")), "");
        assert_eq!(first_candidate_text(&parse(r#"{"candidates": []}"#)), "");
        assert_eq!(
            first_candidate_text(&parse(r#"{"candidates": [{"content": {}}]}"#)),
            ""
        );
    }

    #[tokio::test]
    async fn blank_key_fails_before_any_request() {
        let model = GeminiModel::new("", DEFAULT_MODEL);

        let err = model.complete("hello").await.unwrap_err();
        assert!(matches!(err, ModelError::Unconfigured));
    }

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
        };

        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }
}
