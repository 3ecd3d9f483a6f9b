//! Per-submission orchestration of dispatch, classification, and retry.

use async_trait::async_trait;
use derive_getters::Getters;
use giotto_core::{ErrorCategory, NormalizedRequest};
use giotto_database::Ledger;
use giotto_error::{GiottoResult, HttpError};
use giotto_models::huggingface::{HuggingFacePayload, to_upstream_payload};
use giotto_models::{
    Classification, InferenceDriver, ModelCatalog, RetryController, RetryDecision, classify,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Ledger seam consumed by the orchestrator.
#[async_trait]
pub trait LedgerWriter: Send + Sync {
    /// Create a pending entry, returning its id.
    async fn record(&self, request: &NormalizedRequest, owner: Option<&str>) -> GiottoResult<i32>;

    /// Write a record's terminal success.
    async fn complete(&self, record_id: i32, output: &str, latency: Duration) -> GiottoResult<()>;

    /// Write a record's terminal failure.
    async fn fail(
        &self,
        record_id: i32,
        message: &str,
        category: ErrorCategory,
        latency: Option<Duration>,
    ) -> GiottoResult<()>;
}

#[async_trait]
impl LedgerWriter for Ledger {
    async fn record(&self, request: &NormalizedRequest, owner: Option<&str>) -> GiottoResult<i32> {
        Ok(Ledger::record(self, request, owner).await?)
    }

    async fn complete(&self, record_id: i32, output: &str, latency: Duration) -> GiottoResult<()> {
        Ok(Ledger::complete(self, record_id, output, latency).await?)
    }

    async fn fail(
        &self,
        record_id: i32,
        message: &str,
        category: ErrorCategory,
        latency: Option<Duration>,
    ) -> GiottoResult<()> {
        Ok(Ledger::fail(self, record_id, message, category, latency).await?)
    }
}

/// Terminal result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The dispatch produced output
    Succeeded {
        /// Normalized model output
        output: String,
        /// Wall-clock latency of the successful attempt
        latency: Duration,
    },
    /// The submission failed with a classified category
    Failed {
        /// The classified failure
        classification: Classification,
        /// Raw upstream HTTP status, when one was received
        upstream_status: Option<u16>,
        /// Wall-clock latency of the final attempt, when measurable
        latency: Option<Duration>,
    },
}

/// What a completed submission looked like.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SubmissionOutcome {
    /// Ledger record id the submission wrote to
    record_id: i32,
    /// Logical model identifier the request ran against
    model: String,
    /// Dispatch attempts spent
    attempts: u32,
    /// Wall-clock time from first attempt to terminal outcome
    elapsed: Duration,
    /// Terminal result
    result: SubmissionResult,
}

/// Client-facing orchestrator owning the per-submission state machine.
///
/// Each call to [`submit`](Self::submit) composes a fresh retry controller
/// with the dispatcher and the ledger; nothing is shared between
/// concurrently running submissions.
pub struct SubmissionOrchestrator<D> {
    driver: Arc<D>,
    ledger: Arc<dyn LedgerWriter>,
    catalog: Arc<ModelCatalog>,
    upstream_base_url: String,
    fallback_api_key: Option<String>,
}

impl<D> SubmissionOrchestrator<D>
where
    D: InferenceDriver + 'static,
{
    /// Wire the orchestrator to its collaborators.
    pub fn new(
        driver: Arc<D>,
        ledger: Arc<dyn LedgerWriter>,
        catalog: Arc<ModelCatalog>,
        upstream_base_url: impl Into<String>,
        fallback_api_key: Option<String>,
    ) -> Self {
        Self {
            driver,
            ledger,
            catalog,
            upstream_base_url: upstream_base_url.into(),
            fallback_api_key,
        }
    }

    /// Run one user-initiated submission through to its terminal outcome.
    ///
    /// The attempt loop runs in its own task: a caller that goes away
    /// mid-flight abandons the handle, not the loop, so the ledger still
    /// receives the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the ledger cannot be written. Upstream
    /// failures are not errors here; they come back classified inside the
    /// outcome.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn submit(
        &self,
        request: NormalizedRequest,
        owner: Option<String>,
    ) -> GiottoResult<SubmissionOutcome> {
        let descriptor = self
            .catalog
            .resolve(request.model(), request.custom_model().as_deref());

        // Record the parameters that will actually be dispatched.
        let request = match request.params() {
            Some(_) => request,
            None => request.with_params(descriptor.default_params().clone()),
        };

        let payload = to_upstream_payload(&request, &descriptor);
        let endpoint = format!(
            "{}/models/{}",
            self.upstream_base_url.trim_end_matches('/'),
            descriptor.upstream_path()
        );
        let credential = request
            .api_key()
            .clone()
            .or_else(|| self.fallback_api_key.clone());

        let record_id = self.ledger.record(&request, owner.as_deref()).await?;

        let driver = Arc::clone(&self.driver);
        let ledger = Arc::clone(&self.ledger);
        let model = request.model().clone();
        let handle = tokio::spawn(run_attempts(
            driver, ledger, payload, endpoint, credential, record_id, model,
        ));

        handle
            .await
            .map_err(|e| HttpError::new(format!("Submission task failed: {}", e)))?
    }
}

/// The attempt loop for one submission.
///
/// Attempts are strictly sequential; the fresh controller bounds them and
/// decides which failures are worth waiting out. Only the terminal outcome
/// reaches the ledger.
async fn run_attempts<D: InferenceDriver>(
    driver: Arc<D>,
    ledger: Arc<dyn LedgerWriter>,
    payload: HuggingFacePayload,
    endpoint: String,
    credential: Option<String>,
    record_id: i32,
    model: String,
) -> GiottoResult<SubmissionOutcome> {
    let started = Instant::now();
    let mut controller = RetryController::new();

    loop {
        let attempt = controller.begin_attempt();
        match driver
            .dispatch(&payload, &endpoint, credential.as_deref())
            .await
        {
            Ok(success) => {
                controller.on_success();
                ledger
                    .complete(record_id, success.output(), *success.latency())
                    .await?;
                info!(record_id, attempt, "Submission succeeded");
                return Ok(SubmissionOutcome {
                    record_id,
                    model,
                    attempts: controller.attempts(),
                    elapsed: started.elapsed(),
                    result: SubmissionResult::Succeeded {
                        output: success.output().clone(),
                        latency: *success.latency(),
                    },
                });
            }
            Err(failure) => {
                let classification = classify(failure.body());
                match controller.on_failure(*classification.category()) {
                    RetryDecision::Retry(backoff) => {
                        warn!(
                            record_id,
                            attempt,
                            category = %classification.category(),
                            backoff_secs = backoff.as_secs(),
                            "Model still loading; retrying after backoff"
                        );
                        tokio::time::sleep(backoff).await;
                    }
                    RetryDecision::GiveUp => {
                        ledger
                            .fail(
                                record_id,
                                classification.message(),
                                *classification.category(),
                                *failure.latency(),
                            )
                            .await?;
                        warn!(
                            record_id,
                            attempt,
                            category = %classification.category(),
                            "Submission failed"
                        );
                        return Ok(SubmissionOutcome {
                            record_id,
                            model,
                            attempts: controller.attempts(),
                            elapsed: started.elapsed(),
                            result: SubmissionResult::Failed {
                                upstream_status: *failure.status(),
                                latency: *failure.latency(),
                                classification,
                            },
                        });
                    }
                }
            }
        }
    }
}
