//! Conversion from normalized requests to the upstream payload.

use crate::ModelDescriptor;
use crate::huggingface::{HuggingFaceParameters, HuggingFacePayload};
use giotto_core::NormalizedRequest;

/// Build the upstream wire payload for a validated request.
///
/// Pure field renaming, no numeric transformation. Stop sequences are
/// omitted entirely when the parsed sequence is empty. When the request
/// carries no parameters, the descriptor's defaults apply.
pub fn to_upstream_payload(
    request: &NormalizedRequest,
    descriptor: &ModelDescriptor,
) -> HuggingFacePayload {
    let params = request
        .params()
        .clone()
        .unwrap_or_else(|| descriptor.default_params().clone());

    let stop = if params.stop_sequences().is_empty() {
        None
    } else {
        Some(params.stop_sequences().clone())
    };

    let parameters = HuggingFaceParameters::builder()
        .temperature(*params.temperature())
        .max_new_tokens(*params.max_tokens())
        .top_p(*params.top_p())
        .frequency_penalty(*params.frequency_penalty())
        .presence_penalty(*params.presence_penalty())
        .stop(stop)
        .build()
        .expect("Valid HuggingFaceParameters");

    HuggingFacePayload::builder()
        .inputs(request.input().clone())
        .parameters(parameters)
        .build()
        .expect("Valid HuggingFacePayload")
}
