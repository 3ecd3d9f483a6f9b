//! Diesel models for the inference request ledger.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// Database row for the inference_requests table.
///
/// One row per submission: created pending, updated exactly once with the
/// submission's terminal outcome, never mutated thereafter.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Serialize, derive_getters::Getters)]
#[diesel(table_name = crate::schema::inference_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequestRow {
    id: i32,
    owner: Option<String>,
    model: String,
    input: String,
    params: Option<serde_json::Value>,
    status: String,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    output: Option<String>,
    error_message: Option<String>,
    error_category: Option<String>,
    latency_ms: Option<i32>,
}

/// Insertable struct creating a pending ledger entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::inference_requests)]
pub struct NewInferenceRequestRow {
    pub owner: Option<String>,
    pub model: String,
    pub input: String,
    pub params: Option<serde_json::Value>,
    pub status: String,
}

/// Updateable struct writing a record's terminal outcome.
///
/// Status moves to 'succeeded' or 'failed'; unset fields are left alone.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::inference_requests)]
pub struct UpdateInferenceRequestRow {
    pub status: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub output: Option<String>,
    pub error_message: Option<String>,
    pub error_category: Option<String>,
    pub latency_ms: Option<i32>,
}
