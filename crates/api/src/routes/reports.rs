//! Post report moderation route handlers.

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::RequestId;

use domain::error::DomainError;
use domain::models::{PostReport, ReportStatus, UpdateReportStatusRequest};
use domain::services::PostReportStatusMachine;

/// Create report routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transition", post(transition))
        .route("/apply", post(apply_status))
        .route("/statuses/:status/next", get(next_statuses))
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub current: ReportStatus,
    pub requested: ReportStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TransitionResponse {
    pub status: ReportStatus,
}

#[derive(Debug, Deserialize)]
pub struct ApplyStatusRequest {
    pub report: PostReport,
    pub reviewer_id: Uuid,
    #[serde(flatten)]
    pub update: UpdateReportStatusRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NextStatusesResponse {
    pub current: ReportStatus,
    pub next: Vec<ReportStatus>,
}

/// Validate a report status change.
///
/// POST /api/admin/v1/reports/transition
#[axum::debug_handler]
async fn transition(Json(request): Json<TransitionRequest>) -> Result<impl IntoResponse, ApiError> {
    let status = PostReportStatusMachine::transition(request.current, request.requested)?;
    Ok((StatusCode::OK, Json(TransitionResponse { status })))
}

/// Move a report to a new status and return the updated record.
///
/// POST /api/admin/v1/reports/apply
#[axum::debug_handler]
async fn apply_status(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ApplyStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ApplyStatusRequest {
        mut report,
        reviewer_id,
        update,
    } = request;

    report.apply_status(update.status, reviewer_id, Utc::now())?;
    info!(request_id = %request_id.0, report_id = %report.id, "Report status applied");

    Ok((StatusCode::OK, Json(report)))
}

/// Statuses the moderation screen may offer from the current one.
///
/// GET /api/admin/v1/reports/statuses/{status}/next
#[axum::debug_handler]
async fn next_statuses(Path(status): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let current =
        ReportStatus::from_str(&status).map_err(|e| DomainError::invalid_field("status", e))?;
    let response = NextStatusesResponse {
        current,
        next: PostReportStatusMachine::next_statuses(current),
    };
    Ok((StatusCode::OK, Json(response)))
}
