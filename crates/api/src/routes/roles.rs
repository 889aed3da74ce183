//! Administrator role catalog route handlers.

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::app::AppState;
use crate::error::ApiError;

use domain::models::{AdminRole, AdminRoleInfo, ListRolesResponse, RolePermissionsResponse};
use domain::services::parse_role;

/// Create role routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles))
        .route("/:role/permissions", get(get_role_permissions))
}

/// List all administrator roles with rank and default permissions.
///
/// GET /api/admin/v1/roles
#[axum::debug_handler]
async fn list_roles() -> Result<impl IntoResponse, ApiError> {
    let data: Vec<AdminRoleInfo> = AdminRole::all()
        .iter()
        .copied()
        .map(AdminRoleInfo::from)
        .collect();

    Ok((StatusCode::OK, Json(ListRolesResponse { data })))
}

/// Suggested permissions for a role, used for the default-checked boxes on
/// the create/edit administrator forms.
///
/// GET /api/admin/v1/roles/{role}/permissions
#[axum::debug_handler]
async fn get_role_permissions(Path(role): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let role = parse_role(&role)?;
    let response = RolePermissionsResponse {
        role,
        permissions: role.default_permissions().into_iter().collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}
