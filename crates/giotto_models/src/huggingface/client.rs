//! Dispatch client for the Hugging Face Inference API.

use crate::huggingface::{HuggingFacePayload, normalize_body};
use crate::{DispatchFailure, DispatchSuccess, InferenceDriver};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument};

/// HTTP client performing exactly one outbound call per dispatch attempt.
#[derive(Debug, Clone, Default)]
pub struct HuggingFaceClient {
    client: Client,
}

impl HuggingFaceClient {
    /// Creates a new dispatch client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl InferenceDriver for HuggingFaceClient {
    #[instrument(skip(self, payload, credential), fields(endpoint = %endpoint))]
    async fn dispatch(
        &self,
        payload: &HuggingFacePayload,
        endpoint: &str,
        credential: Option<&str>,
    ) -> Result<DispatchSuccess, DispatchFailure> {
        let mut request = self.client.post(endpoint).json(payload);
        if let Some(key) = credential {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key));
        }

        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = ?e, "HTTP request failed");
                return Err(DispatchFailure::new(
                    None,
                    format!("Request failed: {}", e),
                    Some(started.elapsed()),
                ));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!(error = ?e, "Failed to read response body");
                return Err(DispatchFailure::new(
                    Some(status.as_u16()),
                    format!("Failed to read response body: {}", e),
                    Some(started.elapsed()),
                ));
            }
        };
        let latency = started.elapsed();

        if !status.is_success() {
            error!(status = %status, body = %text, "API error");
            return Err(DispatchFailure::new(Some(status.as_u16()), text, Some(latency)));
        }

        let body: serde_json::Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                error!(error = ?e, "Failed to parse response");
                return Err(DispatchFailure::new(
                    None,
                    format!("Failed to parse response: {}", e),
                    Some(latency),
                ));
            }
        };

        let output = normalize_body(&body);
        debug!(latency_ms = latency.as_millis() as u64, "Received response");
        Ok(DispatchSuccess::new(output, latency))
    }
}
