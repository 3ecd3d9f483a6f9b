//! Tests for the upstream payload builder.

use giotto_core::{GenerationParams, NormalizedRequest};
use giotto_models::ModelCatalog;
use giotto_models::huggingface::to_upstream_payload;

fn request(params: Option<GenerationParams>) -> NormalizedRequest {
    NormalizedRequest::builder()
        .model("chatbot")
        .input("hello")
        .language("python")
        .params(params)
        .build()
        .expect("Valid NormalizedRequest")
}

#[test]
fn builder_renames_fields_without_transforming_values() {
    // Values chosen to be exactly representable in both f32 and f64, so
    // the wire comparison is exact.
    let params = GenerationParams::builder()
        .temperature(0.5)
        .max_tokens(50_u32)
        .top_p(0.25)
        .frequency_penalty(0.75)
        .presence_penalty(1.5)
        .build()
        .expect("Valid GenerationParams");

    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let payload = to_upstream_payload(&request(Some(params)), &descriptor);

    let wire = serde_json::to_value(&payload).expect("Serializes");
    assert_eq!(wire["inputs"], "hello");
    assert_eq!(wire["parameters"]["temperature"], 0.5);
    assert_eq!(wire["parameters"]["max_new_tokens"], 50);
    assert_eq!(wire["parameters"]["top_p"], 0.25);
    assert_eq!(wire["parameters"]["frequency_penalty"], 0.75);
    assert_eq!(wire["parameters"]["presence_penalty"], 1.5);
}

#[test]
fn empty_stop_sequences_are_omitted_from_the_wire() {
    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let payload = to_upstream_payload(&request(Some(GenerationParams::default())), &descriptor);

    let wire = serde_json::to_value(&payload).expect("Serializes");
    let parameters = wire["parameters"].as_object().expect("Parameters object");
    assert!(!parameters.contains_key("stop"));
}

#[test]
fn non_empty_stop_sequences_are_sent_in_order() {
    let params = GenerationParams::builder()
        .stop_sequences(vec!["END".to_string(), "STOP".to_string()])
        .build()
        .expect("Valid GenerationParams");

    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let payload = to_upstream_payload(&request(Some(params)), &descriptor);

    let wire = serde_json::to_value(&payload).expect("Serializes");
    assert_eq!(wire["parameters"]["stop"], serde_json::json!(["END", "STOP"]));
}

#[test]
fn cache_reuse_and_model_wait_are_always_requested() {
    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let payload = to_upstream_payload(&request(None), &descriptor);

    let wire = serde_json::to_value(&payload).expect("Serializes");
    assert_eq!(wire["options"]["use_cache"], true);
    assert_eq!(wire["options"]["wait_for_model"], true);
}

#[test]
fn descriptor_defaults_apply_when_the_request_has_no_params() {
    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let payload = to_upstream_payload(&request(None), &descriptor);

    let wire = serde_json::to_value(&payload).expect("Serializes");
    let temperature = wire["parameters"]["temperature"]
        .as_f64()
        .expect("Temperature present");
    assert!((temperature - 0.7).abs() < 1e-6);
    assert_eq!(wire["parameters"]["max_new_tokens"], 1024);
}
