use axum::Json;
use ministry_core::Permission;
use ministry_models::{ErrorResponse, RoleOption};
use tracing::instrument;

use crate::middleware::auth::{RequireRolesView, RequireUsersCreate};

/// List roles with their display labels
///
/// Feeds the role picker of the user creation form.
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "All roles in registry order", body = Vec<RoleOption>),
        (status = 401, description = "Missing or unreadable session cookie", body = ErrorResponse),
        (status = 403, description = "Missing users.create", body = ErrorResponse),
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Roles"
)]
#[instrument(skip_all)]
pub async fn get_roles(_auth: RequireUsersCreate) -> Json<Vec<RoleOption>> {
    Json(RoleOption::all())
}

/// List every permission the registry knows
#[utoipa::path(
    get,
    path = "/api/permissions",
    responses(
        (status = 200, description = "Permission identifiers", body = Vec<String>),
        (status = 401, description = "Missing or unreadable session cookie", body = ErrorResponse),
        (status = 403, description = "Missing roles.view", body = ErrorResponse),
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Roles"
)]
#[instrument(skip_all)]
pub async fn get_permissions(_auth: RequireRolesView) -> Json<Vec<String>> {
    Json(Permission::all().map(|p| p.to_string()).collect())
}
