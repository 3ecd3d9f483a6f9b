//! HTTP API for the inference gateway.

use crate::identity::Identity;
use crate::orchestrator::{SubmissionOrchestrator, SubmissionResult};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use giotto_core::{ErrorCategory, ErrorResponse, InferenceRequest, InferenceResponse};
use giotto_database::Ledger;
use giotto_models::{HuggingFaceClient, ModelCatalog};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Submission orchestrator.
    pub orchestrator: Arc<SubmissionOrchestrator<HuggingFaceClient>>,
    /// Request ledger, for history queries.
    pub ledger: Ledger,
    /// Model catalog, for the listing endpoint.
    pub catalog: Arc<ModelCatalog>,
    /// Default page size for history queries.
    pub history_page_size: i64,
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/inference", post(run_inference))
        .route("/inference/models", get(list_models))
        .route("/inference/history", get(history))
        .route("/inference/admin/history", get(admin_history))
        .with_state(state)
}

/// Query parameters accepted by the history endpoints.
#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<i64>,
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Run one inference submission end to end.
#[instrument(skip(state, request), fields(model = %request.model(), owner = %identity.owner()))]
async fn run_inference(
    State(state): State<ApiState>,
    identity: Identity,
    Json(request): Json<InferenceRequest>,
) -> Response {
    let normalized = match request.validate() {
        Ok(normalized) => normalized,
        Err(failure) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&failure))).into_response();
        }
    };

    let outcome = match state
        .orchestrator
        .submit(normalized, Some(identity.owner().to_string()))
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "Submission failed internally");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            )
                .into_response();
        }
    };

    match outcome.result() {
        SubmissionResult::Succeeded { output, .. } => {
            let response = InferenceResponse::builder()
                .output(output.clone())
                .model(outcome.model().clone())
                .time_taken_seconds(outcome.elapsed().as_secs_f64())
                .build()
                .expect("Valid InferenceResponse");
            (StatusCode::OK, Json(response)).into_response()
        }
        SubmissionResult::Failed {
            classification,
            upstream_status,
            ..
        } => {
            let status = failure_status(*classification.category(), *upstream_status);
            (status, Json(ErrorResponse::new(classification.message()))).into_response()
        }
    }
}

/// Map a classified failure onto a response status.
///
/// The upstream's own status passes through when it is a valid client or
/// server error; transport and unrecognized failures fall back to a
/// category-appropriate status.
fn failure_status(category: ErrorCategory, upstream_status: Option<u16>) -> StatusCode {
    if let Some(code) = upstream_status {
        if (400..=599).contains(&code) {
            if let Ok(status) = StatusCode::from_u16(code) {
                return status;
            }
        }
    }
    match category {
        ErrorCategory::RateLimit => StatusCode::TOO_MANY_REQUESTS,
        ErrorCategory::Authentication => StatusCode::UNAUTHORIZED,
        ErrorCategory::ModelNotFound => StatusCode::NOT_FOUND,
        ErrorCategory::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::ModelLoading => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCategory::ServerError
        | ErrorCategory::NetworkError
        | ErrorCategory::Unknown => StatusCode::BAD_GATEWAY,
    }
}

/// List the catalog's model descriptors.
#[instrument(skip(state))]
async fn list_models(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "models": state.catalog.descriptors() })),
    )
}

/// The caller's own records, newest first.
#[instrument(skip(state), fields(owner = %identity.owner()))]
async fn history(
    State(state): State<ApiState>,
    identity: Identity,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(state.history_page_size).clamp(1, 100);
    match state.ledger.recent(Some(identity.owner()), limit).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to fetch inference history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch inference history")),
            )
                .into_response()
        }
    }
}

/// Every owner's records, newest first. Requires a privileged identity.
#[instrument(skip(state), fields(owner = %identity.owner()))]
async fn admin_history(
    State(state): State<ApiState>,
    identity: Identity,
    Query(query): Query<HistoryQuery>,
) -> Response {
    if !identity.privileged() {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("Administrator privileges required")),
        )
            .into_response();
    }

    let limit = query.limit.unwrap_or(state.history_page_size).clamp(1, 100);
    match state.ledger.recent(None, limit).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to fetch inference history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch inference history")),
            )
                .into_response()
        }
    }
}
