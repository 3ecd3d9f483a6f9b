//! Unified interface for the Giotto inference gateway.
//!
//! Re-exports the gateway's crates: core request types and validation,
//! the Hugging Face integration, the request ledger, and the HTTP server.

pub use giotto_core::*;
pub use giotto_database::*;
pub use giotto_error::*;
pub use giotto_models::*;
pub use giotto_server::*;
