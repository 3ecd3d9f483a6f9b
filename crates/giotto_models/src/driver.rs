//! Dispatch driver seam.

use crate::huggingface::HuggingFacePayload;
use async_trait::async_trait;
use derive_getters::Getters;
use std::time::Duration;

/// A dispatch attempt that resolved with usable output.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DispatchSuccess {
    /// Normalized output text
    output: String,
    /// Wall-clock time spent on the outbound call
    latency: Duration,
}

impl DispatchSuccess {
    /// Wrap a normalized output and its measured latency.
    pub fn new(output: impl Into<String>, latency: Duration) -> Self {
        Self {
            output: output.into(),
            latency,
        }
    }
}

/// A dispatch attempt that did not produce output.
///
/// Carries the raw, unparsed status and body; classification happens
/// later, never inside the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DispatchFailure {
    /// Upstream HTTP status, absent for transport failures
    status: Option<u16>,
    /// Raw failure body or transport error text
    body: String,
    /// Wall-clock time spent, when the call got far enough to measure
    latency: Option<Duration>,
}

impl DispatchFailure {
    /// Wrap a raw failure.
    pub fn new(status: Option<u16>, body: impl Into<String>, latency: Option<Duration>) -> Self {
        Self {
            status,
            body: body.into(),
            latency,
        }
    }
}

/// Performs the outbound call for one dispatch attempt.
///
/// Implementations make exactly one network call per invocation; retry
/// policy lives entirely with the caller.
#[async_trait]
pub trait InferenceDriver: Send + Sync {
    /// Send the payload to the endpoint, attaching the bearer credential
    /// when one is available.
    async fn dispatch(
        &self,
        payload: &HuggingFacePayload,
        endpoint: &str,
        credential: Option<&str>,
    ) -> Result<DispatchSuccess, DispatchFailure>;
}
