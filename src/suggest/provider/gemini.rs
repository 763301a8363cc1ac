//! Gemini generateContent client
//!
//! Single-shot request against the generative-language endpoint. The key
//! rides in the URL query string and the reply text sits at
//! `candidates[0].content.parts[0].text`; every absent hop degrades to an
//! empty string.

use serde::Deserialize;

use super::SuggestError;

/// Generative-language API base
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1/models";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            http: reqwest::Client::new(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL with the key as a query parameter
    pub fn build_url(&self) -> String {
        format!(
            "{GEMINI_API_URL}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    /// Serialized request body: the prompt as the sole content part
    pub fn build_request_body(&self, prompt: &str) -> Result<String, SuggestError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        serde_json::to_string(&body).map_err(|e| SuggestError::Parse(e.to_string()))
    }

    /// Send the prompt and return the reply text.
    ///
    /// One request, transport-default timeout, no retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        let url = self.build_url();
        let body = self.build_request_body(prompt)?;
        log::debug!("sending generateContent request to model {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SuggestError::Api {
                code: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        log::debug!("response received ({} bytes)", text.len());

        let envelope: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| SuggestError::Parse(e.to_string()))?;
        Ok(envelope.into_text())
    }
}

/// Pull `error.message` out of an error body, falling back to the raw text
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.trim().to_string()
            }
        })
}

/// Response envelope; unknown fields are ignored and absent hops default
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, or empty
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
