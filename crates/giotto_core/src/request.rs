//! Inbound request types and validation.

use crate::{
    FREQUENCY_PENALTY_RANGE, GenerationParams, MAX_TOKENS_RANGE, PRESENCE_PENALTY_RANGE,
    TEMPERATURE_RANGE, TOP_P_RANGE,
};
use derive_builder::Builder;
use derive_getters::Getters;
use giotto_error::{ValidationError, ValidationFailure};
use serde::{Deserialize, Serialize};

/// Model identifier whose upstream path is supplied by the caller rather
/// than looked up in the catalog.
pub const CUSTOM_MODEL_ID: &str = "custom";

/// Generation parameters as they appear on the wire.
///
/// Stop sequences arrive as a single comma-delimited string; normalization
/// parses them into trimmed, non-empty tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct InferenceParams {
    /// Sampling temperature (0.0 - 2.0)
    temperature: f32,
    /// Maximum tokens to generate (1 - 4096)
    max_tokens: u32,
    /// Nucleus sampling parameter (0.0 - 1.0)
    top_p: f32,
    /// Frequency penalty (0.0 - 2.0)
    frequency_penalty: f32,
    /// Presence penalty (0.0 - 2.0)
    presence_penalty: f32,
    /// Comma-delimited stop sequences
    stop_sequences: String,
}

impl InferenceParams {
    /// Creates a new builder for `InferenceParams`.
    pub fn builder() -> InferenceParamsBuilder {
        InferenceParamsBuilder::default()
    }

    /// Check every field against its closed bound and parse the stop
    /// sequences, collecting all violations rather than stopping at the
    /// first.
    pub fn normalize(&self) -> Result<GenerationParams, Vec<ValidationError>> {
        let mut violations = Vec::new();

        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            violations.push(ValidationError::new(
                "params.temperature",
                "must be between 0 and 2",
            ));
        }
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            violations.push(ValidationError::new(
                "params.maxTokens",
                "must be between 1 and 4096",
            ));
        }
        if !TOP_P_RANGE.contains(&self.top_p) {
            violations.push(ValidationError::new(
                "params.topP",
                "must be between 0 and 1",
            ));
        }
        if !FREQUENCY_PENALTY_RANGE.contains(&self.frequency_penalty) {
            violations.push(ValidationError::new(
                "params.frequencyPenalty",
                "must be between 0 and 2",
            ));
        }
        if !PRESENCE_PENALTY_RANGE.contains(&self.presence_penalty) {
            violations.push(ValidationError::new(
                "params.presencePenalty",
                "must be between 0 and 2",
            ));
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        let stop_sequences = self
            .stop_sequences
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();

        Ok(GenerationParams::builder()
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .top_p(self.top_p)
            .frequency_penalty(self.frequency_penalty)
            .presence_penalty(self.presence_penalty)
            .stop_sequences(stop_sequences)
            .build()
            .expect("Valid GenerationParams"))
    }
}

/// An inference request as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct InferenceRequest {
    /// Logical model identifier
    model: String,
    /// Upstream path for the "custom" model identifier
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default)]
    custom_model: Option<String>,
    /// Caller-supplied upstream credential
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default)]
    api_key: Option<String>,
    /// Input text to run through the model
    input: String,
    /// Language hint for the input
    language: String,
    /// Generation parameters; descriptor defaults apply when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default)]
    params: Option<InferenceParams>,
}

impl InferenceRequest {
    /// Creates a new builder for `InferenceRequest`.
    pub fn builder() -> InferenceRequestBuilder {
        InferenceRequestBuilder::default()
    }

    /// Validate structural and numeric-bound constraints.
    ///
    /// All violations are collected and returned together; a request that
    /// passes comes back as a [`NormalizedRequest`] ready for dispatch.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying every violation found.
    pub fn validate(&self) -> Result<NormalizedRequest, ValidationFailure> {
        let mut violations = Vec::new();

        if self.model.is_empty() {
            violations.push(ValidationError::new("model", "must not be empty"));
        }
        if self.input.is_empty() {
            violations.push(ValidationError::new("input", "must not be empty"));
        }
        if self.model == CUSTOM_MODEL_ID
            && self
                .custom_model
                .as_deref()
                .is_none_or(|path| path.trim().is_empty())
        {
            violations.push(ValidationError::new(
                "customModel",
                "must be supplied for the custom model",
            ));
        }

        let params = match &self.params {
            Some(wire) => match wire.normalize() {
                Ok(params) => Some(params),
                Err(mut param_violations) => {
                    violations.append(&mut param_violations);
                    None
                }
            },
            None => None,
        };

        if !violations.is_empty() {
            return Err(ValidationFailure::new(violations));
        }

        Ok(NormalizedRequest {
            model: self.model.clone(),
            custom_model: self.custom_model.clone(),
            api_key: self.api_key.clone(),
            input: self.input.clone(),
            language: self.language.clone(),
            params,
        })
    }
}

/// A request that has passed validation.
///
/// Parameters are fully normalized; `params` is `None` only when the caller
/// omitted them, in which case the resolved descriptor's defaults apply.
#[derive(Debug, Clone, PartialEq, Getters, Builder)]
#[builder(setter(into))]
pub struct NormalizedRequest {
    /// Logical model identifier
    model: String,
    /// Upstream path for the "custom" model identifier
    #[builder(default)]
    custom_model: Option<String>,
    /// Caller-supplied upstream credential
    #[builder(default)]
    api_key: Option<String>,
    /// Input text to run through the model
    input: String,
    /// Language hint for the input
    language: String,
    /// Normalized generation parameters
    #[builder(default)]
    params: Option<GenerationParams>,
}

impl NormalizedRequest {
    /// Creates a new builder for `NormalizedRequest`.
    pub fn builder() -> NormalizedRequestBuilder {
        NormalizedRequestBuilder::default()
    }

    /// Replace the parameters, e.g. with a descriptor's defaults.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = Some(params);
        self
    }
}
