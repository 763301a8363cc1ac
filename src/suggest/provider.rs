//! Suggestion provider
//!
//! Defines the SuggestError types and the factory for building the client
//! from configuration. The API key is validated here so a missing key fails
//! at fetch time with a configuration notice instead of a network error.

use thiserror::Error;

use super::restaurant::ExtractError;
use crate::config::Config;

mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    /// No usable API key in config or environment
    #[error("Suggestions not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("Network error: {0}")]
    Network(String),

    /// The API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to serialize the request or read the response envelope
    #[error("Parse error: {0}")]
    Parse(String),

    /// Response text did not yield a restaurant list
    #[error("Could not parse restaurant data from the response: {0}")]
    Extract(#[from] ExtractError),
}

/// Build the suggestion client from configuration.
///
/// Returns an error if no API key is available (config file or the
/// `GEMINI_API_KEY` environment variable).
pub fn from_config(config: &Config) -> Result<GeminiClient, SuggestError> {
    let api_key = config
        .api
        .key
        .as_ref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            SuggestError::NotConfigured(
                "missing API key; set [api] key in the config file or the GEMINI_API_KEY \
                 environment variable"
                    .to_string(),
            )
        })?;

    if config.api.model.trim().is_empty() {
        return Err(SuggestError::NotConfigured(
            "missing or empty model in [api] config".to_string(),
        ));
    }

    Ok(GeminiClient::new(api_key.clone(), config.api.model.clone()))
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
