//! Upstream provider integration for the Giotto inference gateway.
//!
//! Holds the model catalog, the Hugging Face wire types and dispatch
//! client, the failure classifier, and the per-submission retry controller.

mod catalog;
mod classify;
mod driver;
pub mod huggingface;
mod retry;

pub use catalog::{DEFAULT_MODEL_ID, ModelCatalog, ModelDescriptor, ModelDescriptorBuilder};
pub use classify::{Classification, classify};
pub use driver::{DispatchFailure, DispatchSuccess, InferenceDriver};
pub use huggingface::HuggingFaceClient;
pub use retry::{MAX_ATTEMPTS, RETRY_BACKOFF, RetryController, RetryDecision, RetryState};
