//! Suggestion records and response-text extraction
//!
//! The model is asked for a bare JSON array but routinely wraps it in prose
//! or code fences. Extraction therefore scans for the outermost bracketed
//! substring (first `[` to last `]`, spanning newlines) and parses that.

use thiserror::Error;

/// One suggested restaurant, as produced by the model.
///
/// Parsing is lenient: only `name` is required; a rating that is not a
/// string is treated as absent, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub description: String,
    pub rating: Option<String>,
}

/// Why response text failed to yield a restaurant list
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No bracketed substring anywhere in the text
    #[error("no JSON array found in the response text")]
    NoArray,

    /// A bracketed substring was found but is not valid JSON
    #[error("response array is not valid JSON: {0}")]
    InvalidJson(String),

    /// The array parsed but an element is unusable
    #[error("restaurant entry {index} is malformed: {reason}")]
    Schema { index: usize, reason: String },
}

/// Scrape `text` for the first JSON array literal and parse it.
///
/// An empty array is a valid, empty result. Elements must be objects with a
/// non-empty `name`; `address` and `description` fall back to empty strings
/// and `rating` to `None`. The list is not truncated client-side.
pub fn extract_restaurants(text: &str) -> Result<Vec<Restaurant>, ExtractError> {
    let start = text.find('[').ok_or(ExtractError::NoArray)?;
    let end = text.rfind(']').filter(|&e| e > start).ok_or(ExtractError::NoArray)?;
    let candidate = &text[start..=end];
    log::debug!("located array candidate ({} bytes)", candidate.len());

    let items: Vec<serde_json::Value> = serde_json::from_str(candidate)
        .map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

    let mut restaurants = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = item.as_object().ok_or_else(|| ExtractError::Schema {
            index,
            reason: "not an object".to_string(),
        })?;

        let name = entry
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ExtractError::Schema {
                index,
                reason: "missing name".to_string(),
            });
        }

        let text_field = |key: &str| {
            entry
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };

        restaurants.push(Restaurant {
            name: name.to_string(),
            address: text_field("address"),
            description: text_field("description"),
            rating: entry
                .get("rating")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        });
    }

    log::debug!("parsed {} restaurants", restaurants.len());
    Ok(restaurants)
}

#[cfg(test)]
#[path = "restaurant_tests.rs"]
mod restaurant_tests;
