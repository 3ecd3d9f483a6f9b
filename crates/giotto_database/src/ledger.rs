//! Ledger operations for inference request lifecycles.

use crate::ledger_models::{InferenceRequestRow, NewInferenceRequestRow, UpdateInferenceRequestRow};
use crate::{DatabaseResult, schema};
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use giotto_core::{ErrorCategory, NormalizedRequest};
use giotto_error::{DatabaseError, DatabaseErrorKind};
use std::time::Duration;
use tracing::instrument;

/// Status of a row awaiting its terminal update.
pub const STATUS_PENDING: &str = "pending";
/// Status of a row that completed with output.
pub const STATUS_SUCCEEDED: &str = "succeeded";
/// Status of a row that failed for good.
pub const STATUS_FAILED: &str = "failed";

/// Create a pending ledger entry for a validated request.
///
/// The row id comes from the table's sequence, so ids are issued
/// atomically no matter how many handlers insert concurrently.
pub fn insert_request(
    conn: &mut PgConnection,
    request: &NormalizedRequest,
    owner: Option<&str>,
) -> DatabaseResult<i32> {
    let params = match request.params() {
        Some(params) => Some(serde_json::to_value(params)?),
        None => None,
    };

    let new_row = NewInferenceRequestRow {
        owner: owner.map(String::from),
        model: request.model().clone(),
        input: request.input().clone(),
        params,
        status: STATUS_PENDING.to_string(),
    };

    let id = diesel::insert_into(schema::inference_requests::table)
        .values(&new_row)
        .returning(schema::inference_requests::id)
        .get_result::<i32>(conn)?;

    tracing::debug!(id, model = %request.model(), "Created pending ledger entry");
    Ok(id)
}

/// Write a record's terminal success.
///
/// # Errors
///
/// Returns `AlreadyTerminal` if the row is missing or no longer pending;
/// a record transitions from pending to terminal exactly once.
pub fn complete_request(
    conn: &mut PgConnection,
    record_id: i32,
    output: &str,
    latency: Duration,
) -> DatabaseResult<()> {
    let update = UpdateInferenceRequestRow {
        status: Some(STATUS_SUCCEEDED.to_string()),
        completed_at: Some(Utc::now()),
        output: Some(output.to_string()),
        error_message: None,
        error_category: None,
        latency_ms: Some(latency.as_millis() as i32),
    };
    apply_terminal_update(conn, record_id, &update)
}

/// Write a record's terminal failure.
///
/// # Errors
///
/// Returns `AlreadyTerminal` if the row is missing or no longer pending.
pub fn fail_request(
    conn: &mut PgConnection,
    record_id: i32,
    message: &str,
    category: ErrorCategory,
    latency: Option<Duration>,
) -> DatabaseResult<()> {
    let update = UpdateInferenceRequestRow {
        status: Some(STATUS_FAILED.to_string()),
        completed_at: Some(Utc::now()),
        output: None,
        error_message: Some(message.to_string()),
        error_category: Some(category.to_string()),
        latency_ms: latency.map(|l| l.as_millis() as i32),
    };
    apply_terminal_update(conn, record_id, &update)
}

fn apply_terminal_update(
    conn: &mut PgConnection,
    record_id: i32,
    update: &UpdateInferenceRequestRow,
) -> DatabaseResult<()> {
    use crate::schema::inference_requests::dsl;

    // The status filter makes the terminal transition single-shot: a
    // second update matches zero rows.
    let updated = diesel::update(
        dsl::inference_requests
            .filter(dsl::id.eq(record_id))
            .filter(dsl::status.eq(STATUS_PENDING)),
    )
    .set(update)
    .execute(conn)?;

    if updated == 0 {
        return Err(DatabaseError::new(DatabaseErrorKind::AlreadyTerminal(
            record_id,
        )));
    }

    tracing::debug!(id = record_id, status = ?update.status, "Recorded terminal outcome");
    Ok(())
}

/// Fetch the most recent records, newest first.
///
/// With an owner, only that owner's records are returned; without one the
/// listing is unrestricted.
pub fn recent_requests(
    conn: &mut PgConnection,
    owner_filter: Option<&str>,
    limit: i64,
) -> DatabaseResult<Vec<InferenceRequestRow>> {
    use crate::schema::inference_requests::dsl;

    let mut query = dsl::inference_requests
        .select(InferenceRequestRow::as_select())
        .into_boxed();
    if let Some(owner_id) = owner_filter {
        query = query.filter(dsl::owner.eq(owner_id.to_string()));
    }

    let rows = query
        .order((dsl::created_at.desc(), dsl::id.desc()))
        .limit(limit)
        .load(conn)?;

    Ok(rows)
}

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Durable ledger of inference request lifecycles.
///
/// Wraps the synchronous query functions in `spawn_blocking` so handlers
/// never block the runtime on a database round trip.
#[derive(Clone)]
pub struct Ledger {
    pool: PgPool,
}

impl Ledger {
    /// Wrap an established connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(format!("task failed: {}", e))))?
    }

    /// Create a pending entry, returning its id.
    #[instrument(skip(self, request))]
    pub async fn record(
        &self,
        request: &NormalizedRequest,
        owner: Option<&str>,
    ) -> DatabaseResult<i32> {
        let request = request.clone();
        let owner = owner.map(String::from);
        self.with_conn(move |conn| insert_request(conn, &request, owner.as_deref()))
            .await
    }

    /// Write a record's terminal success.
    #[instrument(skip(self, output))]
    pub async fn complete(
        &self,
        record_id: i32,
        output: &str,
        latency: Duration,
    ) -> DatabaseResult<()> {
        let output = output.to_string();
        self.with_conn(move |conn| complete_request(conn, record_id, &output, latency))
            .await
    }

    /// Write a record's terminal failure.
    #[instrument(skip(self, message))]
    pub async fn fail(
        &self,
        record_id: i32,
        message: &str,
        category: ErrorCategory,
        latency: Option<Duration>,
    ) -> DatabaseResult<()> {
        let message = message.to_string();
        self.with_conn(move |conn| fail_request(conn, record_id, &message, category, latency))
            .await
    }

    /// Fetch the most recent records, newest first.
    #[instrument(skip(self))]
    pub async fn recent(
        &self,
        owner: Option<&str>,
        limit: i64,
    ) -> DatabaseResult<Vec<InferenceRequestRow>> {
        let owner = owner.map(String::from);
        self.with_conn(move |conn| recent_requests(conn, owner.as_deref(), limit))
            .await
    }
}
