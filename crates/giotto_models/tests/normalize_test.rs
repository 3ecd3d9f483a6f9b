//! Tests for upstream response shape normalization.

use giotto_models::huggingface::normalize_body;
use serde_json::json;

#[test]
fn sequence_with_generated_text_wins() {
    let body = json!([{ "generated_text": "hi there" }]);
    assert_eq!(normalize_body(&body), "hi there");
}

#[test]
fn mapping_with_generated_text_is_second_priority() {
    let body = json!({ "generated_text": "hello" });
    assert_eq!(normalize_body(&body), "hello");
}

#[test]
fn unrecognized_shapes_fall_back_to_formatted_json() {
    let body = json!([{ "score": 0.25, "label": "POSITIVE" }]);
    let output = normalize_body(&body);
    assert!(output.starts_with('['));
    assert!(output.contains("POSITIVE"));
}

#[test]
fn non_textual_generated_text_does_not_match() {
    let body = json!([{ "generated_text": 42 }]);
    let output = normalize_body(&body);
    assert!(output.contains("42"));
    assert!(output.starts_with('['));
}

#[test]
fn only_the_first_sequence_element_is_consulted() {
    let body = json!([{ "score": 1 }, { "generated_text": "late" }]);
    let output = normalize_body(&body);
    assert!(output.starts_with('['));
    assert!(output.contains("late"));
}

#[test]
fn scalar_bodies_fall_back_to_formatted_json() {
    let body = json!("plain text");
    assert_eq!(normalize_body(&body), "\"plain text\"");
}
