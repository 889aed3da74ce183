//! Permission catalog route handlers.

use axum::{
    extract::Query, http::StatusCode, response::IntoResponse, routing::{get, post}, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;

use domain::models::{
    get_all_permissions, get_permissions_by_category, get_permissions_by_category_filter,
    AdminPermission, AdminRole, ListPermissionsQuery, ListPermissionsResponse,
};
use domain::services::{parse_role, resolve_effective_permissions};

/// Create permissions routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_permissions))
        .route("/resolve", post(resolve_permissions))
}

#[derive(Debug, Deserialize)]
pub struct ResolvePermissionsRequest {
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolvePermissionsResponse {
    pub role: AdminRole,
    pub permissions: Vec<AdminPermission>,
}

/// List the permission catalog.
///
/// GET /api/admin/v1/permissions?category=
#[axum::debug_handler]
async fn list_permissions(
    Query(query): Query<ListPermissionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let data = if let Some(ref category) = query.category {
        get_permissions_by_category_filter(category)
    } else {
        get_all_permissions()
    };

    let response = ListPermissionsResponse {
        data,
        by_category: get_permissions_by_category(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Effective permissions for a role plus explicit grants.
///
/// POST /api/admin/v1/permissions/resolve
#[axum::debug_handler]
async fn resolve_permissions(
    Json(request): Json<ResolvePermissionsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = parse_role(&request.role)?;
    let permissions = resolve_effective_permissions(role, &request.permissions)?;

    let response = ResolvePermissionsResponse {
        role,
        permissions: permissions.into_iter().collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_creation() {
        let _router: Router<AppState> = router();
    }
}
