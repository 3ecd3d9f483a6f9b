//! Tests for model catalog resolution.

use giotto_models::{DEFAULT_MODEL_ID, ModelCatalog};

#[test]
fn known_identifiers_resolve_to_their_upstream_path() {
    let catalog = ModelCatalog::new();

    let descriptor = catalog.resolve("deepseek-coder", None);
    assert_eq!(descriptor.id(), "deepseek-coder");
    assert_eq!(
        descriptor.upstream_path(),
        "deepseek-ai/deepseek-coder-6.7b-instruct"
    );
    assert!(!descriptor.is_tool());

    let reviewer = catalog.resolve("python-reviewer", None);
    assert!(reviewer.is_tool());
}

#[test]
fn unknown_identifiers_degrade_to_the_default_descriptor() {
    let catalog = ModelCatalog::new();

    let descriptor = catalog.resolve("no-such-model", None);
    assert_eq!(descriptor.id(), DEFAULT_MODEL_ID);
    assert_eq!(descriptor.upstream_path(), "mistralai/Mistral-7B-Instruct-v0.2");
}

#[test]
fn custom_identifier_takes_the_caller_supplied_path() {
    let catalog = ModelCatalog::new();

    let descriptor = catalog.resolve("custom", Some(" my-org/my-model "));
    assert_eq!(descriptor.id(), "custom");
    assert_eq!(descriptor.upstream_path(), "my-org/my-model");
}

#[test]
fn custom_identifier_without_a_path_degrades_to_the_default() {
    let catalog = ModelCatalog::new();

    let descriptor = catalog.resolve("custom", None);
    assert_eq!(descriptor.id(), DEFAULT_MODEL_ID);

    let blank = catalog.resolve("custom", Some("   "));
    assert_eq!(blank.id(), DEFAULT_MODEL_ID);
}

#[test]
fn default_params_match_the_documented_defaults() {
    let catalog = ModelCatalog::new();
    let descriptor = catalog.resolve("chatbot", None);
    let params = descriptor.default_params();

    assert_eq!(*params.temperature(), 0.7);
    assert_eq!(*params.max_tokens(), 1024);
    assert_eq!(*params.top_p(), 0.9);
    assert_eq!(*params.frequency_penalty(), 0.0);
    assert_eq!(*params.presence_penalty(), 0.0);
    assert!(params.stop_sequences().is_empty());
}

#[test]
fn catalog_is_listable() {
    let catalog = ModelCatalog::new();
    assert_eq!(catalog.descriptors().len(), 9);
    assert!(
        catalog
            .descriptors()
            .iter()
            .any(|descriptor| descriptor.id() == DEFAULT_MODEL_ID)
    );
}
