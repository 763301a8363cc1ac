//! Geolocation-by-IP client
//!
//! The terminal analog of the platform location service: a single HTTP read
//! of the caller's approximate position. Refusals and transport failures are
//! both terminal; the caller keeps whatever coordinate it already had.

use serde::Deserialize;
use thiserror::Error;

/// Default geolocation endpoint
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/json/";

/// Errors from a position read
#[derive(Debug, Error)]
pub enum LocateError {
    /// Transport-level failure reaching the service
    #[error("Network error: {0}")]
    Network(String),

    /// The service refused the request
    #[error("Location service error ({code}): {message}")]
    Service { code: u16, message: String },

    /// The service answered with something that is not a position
    #[error("Location service returned an unreadable position: {0}")]
    Malformed(String),
}

/// A resolved position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geolocation service client
#[derive(Debug, Clone)]
pub struct GeoClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GeoClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the current position once. No streaming, no retries.
    pub async fn current_position(&self) -> Result<Coordinate, LocateError> {
        log::debug!("requesting current position from {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LocateError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocateError::Service {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request rejected")
                    .to_string(),
            });
        }

        let position: GeoPosition = response
            .json()
            .await
            .map_err(|e| LocateError::Malformed(e.to_string()))?;

        log::debug!(
            "position received: {:.4}, {:.4}",
            position.latitude,
            position.longitude
        );

        Ok(Coordinate {
            latitude: position.latitude,
            longitude: position.longitude,
        })
    }
}

/// Wire shape of the geolocation response (extra fields ignored)
#[derive(Debug, Deserialize)]
struct GeoPosition {
    latitude: f64,
    longitude: f64,
}
