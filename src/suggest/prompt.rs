//! Prompt construction for the restaurant search

/// Build the natural-language prompt embedding the coordinate and the raw
/// preference text. The model is told to answer with nothing but the JSON
/// array; extraction still treats the reply as untrusted.
pub fn build_prompt(latitude: f64, longitude: f64, preferences: &str) -> String {
    format!(
        r#"Find me restaurants near latitude {latitude}, longitude {longitude} that match these dietary preferences: {preferences}.

Please return ONLY a JSON array of restaurants in this exact format:
[
  {{
    "name": "Restaurant Name",
    "address": "Street address",
    "description": "Brief description of why it matches the dietary preferences",
    "rating": "4.5/5"
  }}
]

Ratings must look like "X.X/5" with a value between 2.0 and 5.0.
Limit to 8 restaurants maximum. Make sure the JSON is valid and contains no other text."#
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
