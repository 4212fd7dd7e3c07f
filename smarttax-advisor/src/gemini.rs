//! HTTP client for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AdviceError;
use crate::provider::AdviceProvider;

/// Environment variable holding the API key. Read on every request so a
/// key set after startup is picked up without restarting.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const SYSTEM_INSTRUCTION: &str = "You are a helpful, knowledgeable, and cautious financial \
     assistant. You explain tax concepts and financial planning principles clearly. Always \
     include a disclaimer that you are an AI and this is not professional legal or financial \
     advice.";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Overridable base URL, mainly for pointing tests at a local server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

/// First non-blank text part of the first candidate, if any.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}

#[async_trait::async_trait]
impl AdviceProvider for GeminiClient {
    async fn generate_advice(&self, question: &str) -> Result<String, AdviceError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(AdviceError::MissingApiKey)?;

        // The key travels in the query string; keep it out of log output.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );
        let request = GenerateContentRequest {
            system_instruction: Content::from_text(SYSTEM_INSTRUCTION),
            contents: vec![Content::from_text(question)],
        };

        info!(model = %self.model, "requesting financial advice");
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_text(parsed).ok_or(AdviceError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Diversify your portfolio."}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            extract_text(parsed),
            Some("Diversify your portfolio.".to_string())
        );
    }

    #[test]
    fn missing_candidates_yield_none() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn blank_text_yields_none() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn candidate_without_content_yields_none() {
        let body = r#"{"candidates": [{}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();

        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn request_serializes_system_instruction_and_question() {
        let request = GenerateContentRequest {
            system_instruction: Content::from_text("be cautious"),
            contents: vec![Content::from_text("How do tax brackets work?")],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["system_instruction"]["parts"][0]["text"],
            "be cautious"
        );
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "How do tax brackets work?"
        );
    }
}
