//! Core data types for the Giotto inference gateway.
//!
//! This crate provides the request, parameter, and classification types
//! shared across the gateway crates.

mod category;
mod params;
mod request;
mod response;

pub use category::ErrorCategory;
pub use params::{
    FREQUENCY_PENALTY_RANGE, GenerationParams, GenerationParamsBuilder, MAX_TOKENS_RANGE,
    PRESENCE_PENALTY_RANGE, TEMPERATURE_RANGE, TOP_P_RANGE,
};
pub use request::{
    CUSTOM_MODEL_ID, InferenceParams, InferenceParamsBuilder, InferenceRequest,
    InferenceRequestBuilder, NormalizedRequest, NormalizedRequestBuilder,
};
pub use response::{ErrorResponse, InferenceResponse, InferenceResponseBuilder};
