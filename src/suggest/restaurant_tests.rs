//! Tests for response-text extraction

use proptest::prelude::*;

use super::*;

fn single_record_json() -> &'static str {
    r#"[{"name":"A","address":"1 Main St","description":"vegan-friendly","rating":"4.5/5"}]"#
}

#[test]
fn test_bare_array_parses_field_for_field() {
    let result = extract_restaurants(single_record_json()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "A");
    assert_eq!(result[0].address, "1 Main St");
    assert_eq!(result[0].description, "vegan-friendly");
    assert_eq!(result[0].rating.as_deref(), Some("4.5/5"));
}

#[test]
fn test_array_embedded_in_prose() {
    let text = format!(
        "Sure! Here are some options:\n\n```json\n{}\n```\nEnjoy your meal!",
        single_record_json()
    );

    let result = extract_restaurants(&text).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "A");
}

#[test]
fn test_array_spanning_newlines() {
    let text = "[\n  {\n    \"name\": \"Green Bowl\",\n    \"address\": \"2 Side St\",\n    \"description\": \"all vegan\",\n    \"rating\": \"4.2/5\"\n  }\n]";

    let result = extract_restaurants(text).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Green Bowl");
}

#[test]
fn test_no_brackets_reports_no_array() {
    let result = extract_restaurants("I could not find any restaurants nearby.");
    assert!(matches!(result, Err(ExtractError::NoArray)));
}

#[test]
fn test_open_bracket_without_close_reports_no_array() {
    let result = extract_restaurants("here you go: [ {\"name\": \"A\"");
    assert!(matches!(result, Err(ExtractError::NoArray)));
}

#[test]
fn test_close_before_open_reports_no_array() {
    let result = extract_restaurants("] oops [");
    assert!(matches!(result, Err(ExtractError::NoArray)));
}

#[test]
fn test_invalid_json_between_brackets() {
    let result = extract_restaurants("[ {name: Green Bowl} ]");
    assert!(matches!(result, Err(ExtractError::InvalidJson(_))));
}

#[test]
fn test_greedy_scan_spans_multiple_arrays() {
    // First `[` to last `]`: two arrays with prose between do not parse
    let text = r#"[{"name":"A"}] and also [{"name":"B"}]"#;
    let result = extract_restaurants(text);
    assert!(matches!(result, Err(ExtractError::InvalidJson(_))));
}

#[test]
fn test_empty_array_is_ok() {
    let result = extract_restaurants("Nothing matched. []").unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_missing_optional_fields_default() {
    let result = extract_restaurants(r#"[{"name":"A"}]"#).unwrap();

    assert_eq!(result[0].name, "A");
    assert_eq!(result[0].address, "");
    assert_eq!(result[0].description, "");
    assert!(result[0].rating.is_none());
}

#[test]
fn test_missing_name_is_schema_error() {
    let result = extract_restaurants(r#"[{"address":"1 Main St"}]"#);
    assert!(
        matches!(result, Err(ExtractError::Schema { index: 0, .. })),
        "a record without a name is unusable"
    );
}

#[test]
fn test_blank_name_is_schema_error() {
    let result = extract_restaurants(r#"[{"name":"  "}]"#);
    assert!(matches!(result, Err(ExtractError::Schema { index: 0, .. })));
}

#[test]
fn test_non_object_element_is_schema_error() {
    let result = extract_restaurants(r#"[{"name":"A"}, 42]"#);
    assert!(matches!(result, Err(ExtractError::Schema { index: 1, .. })));
}

#[test]
fn test_non_string_rating_is_dropped() {
    let result = extract_restaurants(r#"[{"name":"A","rating":4.5}]"#).unwrap();
    assert!(result[0].rating.is_none());
}

#[test]
fn test_list_is_not_truncated() {
    let records: Vec<String> = (0..12).map(|i| format!(r#"{{"name":"R{i}"}}"#)).collect();
    let text = format!("[{}]", records.join(","));

    let result = extract_restaurants(&text).unwrap();
    assert_eq!(result.len(), 12);
}

// For any list of well-formed records serialized into surrounding prose
// without brackets, extraction recovers every record in order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_wrapped_arrays_round_trip(
        names in prop::collection::vec("[A-Za-z ]{1,20}", 1..8),
        prefix in "[a-zA-Z,.!\n ]{0,40}",
        suffix in "[a-zA-Z,.!\n ]{0,40}",
    ) {
        let records: Vec<String> = names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(|n| {
                serde_json::json!({
                    "name": n,
                    "address": "1 Main St",
                    "description": "close by",
                    "rating": "4.0/5",
                })
                .to_string()
            })
            .collect();
        prop_assume!(!records.is_empty());

        let text = format!("{prefix}[{}]{suffix}", records.join(","));
        let result = extract_restaurants(&text).unwrap();

        let expected: Vec<&String> = names.iter().filter(|n| !n.trim().is_empty()).collect();
        prop_assert_eq!(result.len(), expected.len());
        for (record, name) in result.iter().zip(expected) {
            prop_assert_eq!(&record.name, name);
        }
    }
}
