//! Tests for provider construction from configuration

use super::*;

fn config_with_key(key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.api.key = key.map(str::to_string);
    config
}

#[test]
fn test_from_config_with_key() {
    let config = config_with_key(Some("AIza-test"));

    let client = from_config(&config).unwrap();
    assert_eq!(client.api_key(), "AIza-test");
    assert_eq!(client.model(), "gemini-2.5-flash");
}

#[test]
fn test_from_config_missing_key() {
    let config = config_with_key(None);

    let result = from_config(&config);
    assert!(matches!(result, Err(SuggestError::NotConfigured(_))));
}

#[test]
fn test_from_config_blank_key() {
    let config = config_with_key(Some("   "));

    let result = from_config(&config);
    assert!(matches!(result, Err(SuggestError::NotConfigured(_))));
}

#[test]
fn test_from_config_blank_model() {
    let mut config = config_with_key(Some("AIza-test"));
    config.api.model = "  ".to_string();

    let result = from_config(&config);
    assert!(matches!(result, Err(SuggestError::NotConfigured(_))));
}

#[test]
fn test_not_configured_message_names_the_sources() {
    let config = config_with_key(None);

    let message = from_config(&config).unwrap_err().to_string();
    assert!(message.contains("GEMINI_API_KEY"));
    assert!(message.contains("[api]"));
}

#[test]
fn test_extract_error_wraps_with_parse_wording() {
    let err: SuggestError = ExtractError::NoArray.into();
    assert!(
        err.to_string()
            .starts_with("Could not parse restaurant data")
    );
}
