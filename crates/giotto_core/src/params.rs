//! Generation parameter types and bounds.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Closed bound for sampling temperature.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;
/// Closed bound for the generation length cap.
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 1..=4096;
/// Closed bound for nucleus sampling.
pub const TOP_P_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Closed bound for the frequency penalty.
pub const FREQUENCY_PENALTY_RANGE: RangeInclusive<f32> = 0.0..=2.0;
/// Closed bound for the presence penalty.
pub const PRESENCE_PENALTY_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Validated generation parameters.
///
/// Every numeric field lies within its closed bound before a dispatch is
/// attempted; stop sequences are trimmed and non-empty. Instances come from
/// [`crate::InferenceParams::normalize`] or from a catalog descriptor's
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct GenerationParams {
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
    /// Maximum tokens to generate
    #[builder(default = "1024")]
    max_tokens: u32,
    /// Nucleus sampling parameter
    #[builder(default = "0.9")]
    top_p: f32,
    /// Frequency penalty
    #[builder(default = "0.0")]
    frequency_penalty: f32,
    /// Presence penalty
    #[builder(default = "0.0")]
    presence_penalty: f32,
    /// Sequences that end generation early
    #[builder(default)]
    stop_sequences: Vec<String>,
}

impl GenerationParams {
    /// Creates a new builder for `GenerationParams`.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::builder().build().expect("Valid GenerationParams")
    }
}
