//! Tests for upstream failure classification.

use giotto_core::ErrorCategory;
use giotto_models::classify;

#[test]
fn loading_model_is_classified_from_a_structured_body() {
    let classification = classify(r#"{"error":"Model xyz is currently loading"}"#);
    assert_eq!(*classification.category(), ErrorCategory::ModelLoading);
}

#[test]
fn credit_exhaustion_is_rate_limit_with_a_remediation() {
    let classification = classify(
        r#"{"error":"You have exceeded your monthly included credits for Inference Endpoints"}"#,
    );
    assert_eq!(*classification.category(), ErrorCategory::RateLimit);
    assert!(classification.message().contains("API key"));
}

#[test]
fn unauthorized_phrasing_is_authentication() {
    let classification =
        classify(r#"{"error":"Authorization header is correct, but the token seems invalid"}"#);
    assert_eq!(*classification.category(), ErrorCategory::Authentication);
}

#[test]
fn missing_model_phrasing_is_model_not_found() {
    let classification = classify(r#"{"error":"Model my-org/gone does not exist"}"#);
    assert_eq!(*classification.category(), ErrorCategory::ModelNotFound);
}

#[test]
fn server_fault_phrasing_is_server_error() {
    let classification = classify(r#"{"error":"Internal Server Error"}"#);
    assert_eq!(*classification.category(), ErrorCategory::ServerError);
}

#[test]
fn raw_text_falls_back_to_substring_matching() {
    let classification = classify("503 Service Unavailable: upstream worker crashed");
    assert_eq!(*classification.category(), ErrorCategory::ServerError);
}

#[test]
fn transport_failures_are_network_errors() {
    let classification = classify("Request failed: connection refused (os error 111)");
    assert_eq!(*classification.category(), ErrorCategory::NetworkError);
}

#[test]
fn unmatched_structured_text_is_unknown_and_passed_through() {
    let classification = classify(r#"{"error":"flux capacitor misaligned"}"#);
    assert_eq!(*classification.category(), ErrorCategory::Unknown);
    assert_eq!(classification.message(), "flux capacitor misaligned");
}

#[test]
fn unmatched_raw_text_is_unknown_and_passed_through() {
    let classification = classify("gibberish the gateway has never seen");
    assert_eq!(*classification.category(), ErrorCategory::Unknown);
    assert_eq!(classification.message(), "gibberish the gateway has never seen");
}

#[test]
fn phrase_table_order_breaks_ties() {
    // A pathological body matching two categories takes the earlier row.
    let classification =
        classify(r#"{"error":"exceeded your monthly included credits while currently loading"}"#);
    assert_eq!(*classification.category(), ErrorCategory::RateLimit);
}

#[test]
fn classification_is_deterministic() {
    let body = r#"{"error":"Model xyz is currently loading"}"#;
    assert_eq!(classify(body), classify(body));
}

#[test]
fn matching_is_case_insensitive() {
    let classification = classify(r#"{"error":"MODEL XYZ IS CURRENTLY LOADING"}"#);
    assert_eq!(*classification.category(), ErrorCategory::ModelLoading);
}
