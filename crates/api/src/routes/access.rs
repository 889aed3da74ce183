//! Access decision route handlers.
//!
//! Handlers are stateless: the caller submits snapshots of the acting
//! administrator and the targets, and persists whatever comes back.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Extension, Json,
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::RequestId;

use domain::models::{
    AdminField, AdminStatus, Administrator, BulkStatusRequest, ChangeStatusRequest,
};
use domain::services::{bulk_change_status, change_status, AdminAction, BulkStatusOutcome};

/// Create access decision routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check", post(check_access))
        .route("/change-status", post(change_admin_status))
        .route("/bulk-status", post(bulk_status))
        .route("/login-attempt", post(record_login_attempt))
        .route("/otp", post(request_otp))
}

#[derive(Debug, Deserialize)]
pub struct AccessCheckRequest {
    pub actor: Administrator,
    pub target: Administrator,
    pub action: AdminAction,
    /// Requested status for `change_status`; enables the no-op check.
    pub new_status: Option<AdminStatus>,
    /// Fields touched by an `edit`; enables the field-aware check.
    pub fields: Option<Vec<AdminField>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AccessCheckResponse {
    pub action: AdminAction,
    pub allowed: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub actor: Administrator,
    pub target: Administrator,
    #[serde(flatten)]
    pub change: ChangeStatusRequest,
}

#[derive(Debug, Deserialize)]
pub struct BulkStatusCheckRequest {
    pub actor: Administrator,
    #[serde(default)]
    pub targets: Vec<Administrator>,
    pub ids: Vec<Uuid>,
    pub status: AdminStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BulkStatusResponse {
    #[serde(flatten)]
    pub outcome: BulkStatusOutcome,
    /// Targets after the change, for the caller to persist.
    pub targets: Vec<Administrator>,
}

#[derive(Debug, Deserialize)]
pub struct LoginAttemptRequest {
    pub admin: Administrator,
    pub succeeded: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginAttemptResponse {
    pub locked: bool,
    pub admin: Administrator,
}

#[derive(Debug, Deserialize)]
pub struct OtpRequest {
    pub admin: Administrator,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OtpResponse {
    pub allowed: bool,
    pub admin: Administrator,
}

/// Decide whether the actor may perform an action on the target.
///
/// POST /api/admin/v1/access/check
#[axum::debug_handler]
async fn check_access(
    State(state): State<AppState>,
    Json(request): Json<AccessCheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let AccessCheckRequest {
        actor,
        target,
        action,
        new_status,
        fields,
    } = request;

    let allowed = match (action, new_status, fields.as_deref()) {
        (AdminAction::ChangeStatus, Some(status), _) => {
            state.policy.can_change_status(&actor, &target, status)?
        }
        (AdminAction::Edit, _, Some(fields)) => {
            state.policy.can_edit_fields(&actor, &target, fields)
        }
        (action, _, _) => state.policy.decide(&actor, &target, action),
    };

    debug!(
        actor_id = %actor.id,
        target_id = %target.id,
        action = %action,
        allowed,
        "Access check"
    );

    Ok((StatusCode::OK, Json(AccessCheckResponse { action, allowed })))
}

/// Apply a status change to one administrator.
///
/// POST /api/admin/v1/access/change-status
#[axum::debug_handler]
async fn change_admin_status(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<StatusChangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let StatusChangeRequest {
        actor,
        mut target,
        change,
    } = request;

    change_status(&state.policy, &actor, &mut target, change.status, Utc::now())?;
    info!(request_id = %request_id.0, target_id = %target.id, "Status change applied");

    Ok((StatusCode::OK, Json(target)))
}

/// Apply a status to a selection of administrators with per-item checks.
///
/// POST /api/admin/v1/access/bulk-status
#[axum::debug_handler]
async fn bulk_status(
    State(state): State<AppState>,
    Json(request): Json<BulkStatusCheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let BulkStatusCheckRequest {
        actor,
        mut targets,
        ids,
        status,
    } = request;

    let form = BulkStatusRequest { ids, status };
    form.validate()?;

    let outcome = bulk_change_status(
        &state.policy,
        &actor,
        &mut targets,
        &form.ids,
        form.status,
        state.config.policy.max_bulk_size,
        Utc::now(),
    )?;

    Ok((StatusCode::OK, Json(BulkStatusResponse { outcome, targets })))
}

/// Record a login outcome against the lockout policy.
///
/// POST /api/admin/v1/access/login-attempt
#[axum::debug_handler]
async fn record_login_attempt(
    State(state): State<AppState>,
    Json(request): Json<LoginAttemptRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut admin = request.admin;
    let now = Utc::now();

    if request.succeeded {
        // A locked account stays locked even with the right password.
        if !admin.is_locked(now) {
            admin.record_successful_login(now);
        }
    } else {
        admin.record_failed_login(&state.lockout, now);
    }

    let response = LoginAttemptResponse {
        locked: admin.is_locked(now),
        admin,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Check the OTP resend cooldown and stamp the send when allowed.
///
/// POST /api/admin/v1/access/otp
#[axum::debug_handler]
async fn request_otp(
    State(state): State<AppState>,
    Json(request): Json<OtpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut admin = request.admin;
    let now = Utc::now();

    let allowed = admin.can_send_otp(&state.lockout, now);
    if allowed {
        admin.mark_otp_sent(now);
    }

    Ok((StatusCode::OK, Json(OtpResponse { allowed, admin })))
}
