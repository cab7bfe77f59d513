use axum::Json;
use ministry_auth::access;
use ministry_core::AppError;
use ministry_models::{
    ErrorResponse, PermissionCheckRequest, PermissionCheckResponse, SessionResponse,
};
use tracing::{debug, instrument};

use crate::metrics::track_authorization_check;
use crate::middleware::auth::{AuthUser, CurrentSession};
use crate::validator::ValidatedJson;

/// Get the session of the current request
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Missing or unreadable session cookie", body = ErrorResponse),
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn get_session(AuthUser(session): AuthUser) -> Result<Json<SessionResponse>, AppError> {
    let permissions = session.permission_names().to_vec();
    let role_label = session.role_label().to_string();
    let is_super = session.is_super();

    Ok(Json(SessionResponse {
        user: session.into_user(),
        role_label,
        is_super,
        permissions,
    }))
}

/// Check whether the current session is granted a permission
///
/// Anonymous callers are answered too; nothing is ever granted to them.
#[utoipa::path(
    post,
    path = "/api/permissions/check",
    request_body = PermissionCheckRequest,
    responses(
        (status = 200, description = "Resolution result", body = PermissionCheckResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn check_permission(
    CurrentSession(session): CurrentSession,
    ValidatedJson(body): ValidatedJson<PermissionCheckRequest>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let granted = access::can_named(session.as_ref(), &body.permission);

    let role = session.as_ref().map(|s| s.role_name()).unwrap_or("anonymous");
    track_authorization_check(granted, role);
    debug!(permission = %body.permission, granted, role, "Permission check");

    Ok(Json(PermissionCheckResponse {
        permission: body.permission,
        granted,
    }))
}
