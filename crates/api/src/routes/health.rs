//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub policy: PolicyHealth,
}

/// Active policy options, so operators can confirm what is deployed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PolicyHealth {
    pub admins_may_delete_subordinates: bool,
    pub max_bulk_size: usize,
}

/// Simple status response for liveness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        policy: PolicyHealth {
            admins_may_delete_subordinates: state.policy.admins_may_delete_subordinates,
            max_bulk_size: state.config.policy.max_bulk_size,
        },
    })
}

/// Liveness probe endpoint.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}
