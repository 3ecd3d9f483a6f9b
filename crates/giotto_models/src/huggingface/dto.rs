//! Hugging Face Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;

/// Generation parameters in the upstream's vocabulary.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize)]
#[builder(setter(into))]
pub struct HuggingFaceParameters {
    /// Temperature for sampling
    temperature: f32,
    /// Maximum new tokens to generate
    max_new_tokens: u32,
    /// Top-p sampling
    top_p: f32,
    /// Frequency penalty
    frequency_penalty: f32,
    /// Presence penalty
    presence_penalty: f32,
    /// Stop sequences, omitted entirely when none were supplied
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
}

impl HuggingFaceParameters {
    /// Creates a new builder for `HuggingFaceParameters`.
    pub fn builder() -> HuggingFaceParametersBuilder {
        HuggingFaceParametersBuilder::default()
    }
}

/// Dispatch options sent with every request.
///
/// The upstream is always asked to reuse cached results and to wait for a
/// cold model instead of failing immediately; the retry controller owns the
/// resulting latency tradeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct HuggingFaceOptions {
    /// Reuse cached results when available
    use_cache: bool,
    /// Block on a cold model instead of returning an immediate error
    wait_for_model: bool,
}

impl Default for HuggingFaceOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            wait_for_model: true,
        }
    }
}

/// Hugging Face API request payload.
#[derive(Debug, Clone, PartialEq, Getters, Builder, Serialize)]
#[builder(setter(into))]
pub struct HuggingFacePayload {
    /// Input text
    inputs: String,
    /// Generation parameters
    parameters: HuggingFaceParameters,
    /// Dispatch options
    #[builder(default)]
    options: HuggingFaceOptions,
}

impl HuggingFacePayload {
    /// Creates a new builder for `HuggingFacePayload`.
    pub fn builder() -> HuggingFacePayloadBuilder {
        HuggingFacePayloadBuilder::default()
    }
}
