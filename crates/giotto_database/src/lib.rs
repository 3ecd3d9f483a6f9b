//! PostgreSQL request ledger for the Giotto inference gateway.
//!
//! Every dispatch submission gets one row, created pending and updated
//! exactly once with its terminal outcome.

mod connection;
mod ledger;
mod ledger_models;
pub mod schema;

pub use connection::{MIGRATIONS, create_pool, establish_connection, run_migrations};
pub use ledger::{
    Ledger, STATUS_FAILED, STATUS_PENDING, STATUS_SUCCEEDED, complete_request, fail_request,
    insert_request, recent_requests,
};
pub use ledger_models::{InferenceRequestRow, NewInferenceRequestRow, UpdateInferenceRequestRow};

use giotto_error::DatabaseError;

/// Result alias for ledger operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
