//! HTTP surface for the Giotto inference gateway.
//!
//! Composes the validator, catalog, dispatcher, classifier, retry
//! controller, and ledger behind an axum router.

mod api;
mod config;
mod identity;
mod orchestrator;

pub use api::{ApiState, create_router};
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use identity::{IDENTITY_HEADER, Identity, MissingIdentity, PRIVILEGE_HEADER};
pub use orchestrator::{
    LedgerWriter, SubmissionOrchestrator, SubmissionOutcome, SubmissionResult,
};
