//! Tests for inbound request validation.

use giotto_core::{InferenceParams, InferenceRequest};

fn params(
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    stop_sequences: &str,
) -> InferenceParams {
    InferenceParams::builder()
        .temperature(temperature)
        .max_tokens(max_tokens)
        .top_p(top_p)
        .frequency_penalty(frequency_penalty)
        .presence_penalty(presence_penalty)
        .stop_sequences(stop_sequences)
        .build()
        .expect("Valid InferenceParams")
}

fn request(model: &str, input: &str, wire_params: Option<InferenceParams>) -> InferenceRequest {
    InferenceRequest::builder()
        .model(model)
        .input(input)
        .language("python")
        .params(wire_params)
        .build()
        .expect("Valid InferenceRequest")
}

#[test]
fn valid_request_normalizes_without_changing_values() {
    let request = request(
        "chatbot",
        "hello",
        Some(params(0.7, 50, 0.9, 0.0, 0.0, "")),
    );

    let normalized = request.validate().expect("Valid request");
    let generation = normalized.params().as_ref().expect("Params present");

    assert_eq!(normalized.model(), "chatbot");
    assert_eq!(normalized.input(), "hello");
    assert_eq!(*generation.temperature(), 0.7);
    assert_eq!(*generation.max_tokens(), 50);
    assert_eq!(*generation.top_p(), 0.9);
    assert_eq!(*generation.frequency_penalty(), 0.0);
    assert_eq!(*generation.presence_penalty(), 0.0);
    assert!(generation.stop_sequences().is_empty());
}

#[test]
fn stop_sequences_are_trimmed_and_empty_tokens_dropped() {
    let request = request(
        "chatbot",
        "hello",
        Some(params(0.7, 50, 0.9, 0.0, 0.0, " END , ,foo ,, <|eot|> ")),
    );

    let normalized = request.validate().expect("Valid request");
    let generation = normalized.params().as_ref().expect("Params present");

    assert_eq!(
        generation.stop_sequences(),
        &vec!["END".to_string(), "foo".to_string(), "<|eot|>".to_string()]
    );
}

#[test]
fn all_violations_are_collected_together() {
    let request = request("", "", Some(params(2.5, 0, 1.5, -0.1, 3.0, "")));

    let failure = request.validate().expect_err("Invalid request");
    let fields: Vec<&str> = failure.violations().iter().map(|v| v.field()).collect();

    assert_eq!(
        fields,
        vec![
            "model",
            "input",
            "params.temperature",
            "params.maxTokens",
            "params.topP",
            "params.frequencyPenalty",
            "params.presencePenalty",
        ]
    );
}

#[test]
fn numeric_bounds_are_closed() {
    // Every value sits exactly on a bound edge and passes.
    let edges = request(
        "chatbot",
        "hello",
        Some(params(2.0, 4096, 1.0, 2.0, 2.0, "")),
    );
    assert!(edges.validate().is_ok());

    let low_edges = request("chatbot", "hello", Some(params(0.0, 1, 0.0, 0.0, 0.0, "")));
    assert!(low_edges.validate().is_ok());

    let over = request(
        "chatbot",
        "hello",
        Some(params(2.0001, 4097, 1.0, 2.0, 2.0, "")),
    );
    let failure = over.validate().expect_err("Out of bounds");
    assert_eq!(failure.violations().len(), 2);
}

#[test]
fn custom_model_requires_a_path() {
    let missing = request("custom", "hello", None);
    let failure = missing.validate().expect_err("Missing custom path");
    assert_eq!(failure.violations().len(), 1);
    assert_eq!(failure.violations()[0].field(), "customModel");

    let supplied = InferenceRequest::builder()
        .model("custom")
        .custom_model("my-org/my-model".to_string())
        .input("hello")
        .language("python")
        .build()
        .expect("Valid InferenceRequest");
    assert!(supplied.validate().is_ok());
}

#[test]
fn omitted_params_pass_through_as_none() {
    let normalized = request("chatbot", "hello", None)
        .validate()
        .expect("Valid request");
    assert!(normalized.params().is_none());
}

#[test]
fn wire_format_is_camel_case() {
    let body = serde_json::json!({
        "model": "chatbot",
        "input": "hello",
        "language": "python",
        "params": {
            "temperature": 0.7,
            "maxTokens": 50,
            "topP": 0.9,
            "frequencyPenalty": 0,
            "presencePenalty": 0,
            "stopSequences": ""
        }
    });

    let request: InferenceRequest = serde_json::from_value(body).expect("Deserializes");
    let normalized = request.validate().expect("Valid request");
    let generation = normalized.params().as_ref().expect("Params present");
    assert_eq!(*generation.max_tokens(), 50);
}
