// Configuration type definitions

use serde::Deserialize;

use crate::location::provider::DEFAULT_GEO_ENDPOINT;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub location: LocationConfig,
}

/// Generative-language API section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API key; overridden by the `GEMINI_API_KEY` environment variable
    #[serde(default)]
    pub key: Option<String>,

    /// Model used for restaurant suggestions
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            key: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Geolocation service section
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Endpoint for the one-shot geolocation-by-IP lookup
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_GEO_ENDPOINT.to_string()
}
