//! Hugging Face Inference API integration.

mod client;
mod conversions;
mod dto;
mod normalize;

pub use client::HuggingFaceClient;
pub use conversions::to_upstream_payload;
pub use dto::{
    HuggingFaceOptions, HuggingFaceParameters, HuggingFaceParametersBuilder, HuggingFacePayload,
    HuggingFacePayloadBuilder,
};
pub use normalize::normalize_body;
