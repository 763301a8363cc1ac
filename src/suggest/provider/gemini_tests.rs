//! Tests for the Gemini API client

use proptest::prelude::*;

use super::*;

#[test]
fn test_build_url_format() {
    let client = GeminiClient::new("AIza-test-key".to_string(), "gemini-2.5-flash".to_string());
    let url = client.build_url();

    assert!(url.starts_with("https://generativelanguage.googleapis.com/v1/models/"));
    assert!(url.contains("gemini-2.5-flash:generateContent"));
    assert!(url.contains("key=AIza-test-key"));
}

#[test]
fn test_envelope_text_extraction() {
    let body = r#"{
        "candidates": [
            { "content": { "parts": [ { "text": "[{\"name\":\"A\"}]" } ] } }
        ]
    }"#;

    let envelope: GenerateResponse = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.into_text(), r#"[{"name":"A"}]"#);
}

#[test]
fn test_envelope_first_part_wins() {
    let body = r#"{
        "candidates": [
            { "content": { "parts": [ { "text": "first" }, { "text": "second" } ] } },
            { "content": { "parts": [ { "text": "other candidate" } ] } }
        ]
    }"#;

    let envelope: GenerateResponse = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.into_text(), "first");
}

#[test]
fn test_absent_hops_default_to_empty() {
    for body in [
        "{}",
        r#"{"candidates": []}"#,
        r#"{"candidates": [{}]}"#,
        r#"{"candidates": [{"content": {}}]}"#,
        r#"{"candidates": [{"content": {"parts": []}}]}"#,
        r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
    ] {
        let envelope: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_text(), "", "body: {body}");
    }
}

#[test]
fn test_envelope_ignores_unknown_fields() {
    let body = r#"{
        "candidates": [
            {
                "content": { "parts": [ { "text": "hi" } ], "role": "model" },
                "finishReason": "STOP",
                "index": 0
            }
        ],
        "usageMetadata": { "totalTokenCount": 12 }
    }"#;

    let envelope: GenerateResponse = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.into_text(), "hi");
}

#[test]
fn test_api_error_message_prefers_nested_message() {
    let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
    assert_eq!(api_error_message(body), "API key not valid");
}

#[test]
fn test_api_error_message_falls_back_to_body() {
    assert_eq!(api_error_message("plain failure text"), "plain failure text");
}

#[test]
fn test_api_error_message_empty_body() {
    assert_eq!(api_error_message(""), "Unknown error");
    assert_eq!(api_error_message("  \n"), "Unknown error");
}

// For any API key, the constructed client stores that exact key for
// authentication, and the URL carries it
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_api_key_storage(
        api_key in "[a-zA-Z0-9-_]{10,100}",
        model in "[a-zA-Z0-9.-]{5,20}",
    ) {
        let client = GeminiClient::new(api_key.clone(), model);

        prop_assert_eq!(client.api_key(), &api_key);
        let expected_suffix = format!("key={}", api_key);
        prop_assert!(client.build_url().ends_with(&expected_suffix));
    }

    #[test]
    fn prop_model_selection_storage(
        api_key in "[a-zA-Z0-9-_]{10,50}",
        model in "[a-zA-Z0-9.-]{5,50}",
    ) {
        let client = GeminiClient::new(api_key, model.clone());

        prop_assert_eq!(client.model(), &model);
        let expected_path = format!("/{}:generateContent", model);
        prop_assert!(client.build_url().contains(&expected_path));
    }

    // For any prompt, the request body is a contents array with exactly one
    // part whose text matches the prompt
    #[test]
    fn prop_request_format_correctness(
        api_key in "[a-zA-Z0-9-_]{10,50}",
        model in "[a-zA-Z0-9.-]{5,50}",
        prompt in ".*",
    ) {
        let client = GeminiClient::new(api_key, model);

        let body = client.build_request_body(&prompt);
        prop_assert!(body.is_ok(), "request body should serialize");

        let json: serde_json::Value = serde_json::from_str(&body.unwrap())
            .expect("request body should be valid JSON");

        let contents = json.get("contents").and_then(|v| v.as_array());
        prop_assert!(contents.is_some(), "request should have a contents array");
        let contents = contents.unwrap();
        prop_assert_eq!(contents.len(), 1);

        let parts = contents[0].get("parts").and_then(|v| v.as_array());
        prop_assert!(parts.is_some(), "content should have a parts array");
        let parts = parts.unwrap();
        prop_assert_eq!(parts.len(), 1);

        prop_assert_eq!(
            parts[0].get("text").and_then(|v| v.as_str()),
            Some(prompt.as_str())
        );
    }
}
