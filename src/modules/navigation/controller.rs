use axum::Json;
use ministry_models::{ErrorResponse, NavigationItem};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{AuthUser, CurrentSession};
use crate::modules::navigation::service::NavigationService;

#[derive(Serialize, ToSchema)]
pub struct DashboardShell {
    pub user_name: String,
    pub role_label: String,
    pub navigation: Vec<NavigationItem>,
}

/// Navigation entries visible to the current session
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Visible menu entries, empty when anonymous", body = Vec<NavigationItem>),
    ),
    tag = "Navigation"
)]
#[instrument(skip_all)]
pub async fn get_navigation(CurrentSession(session): CurrentSession) -> Json<Vec<NavigationItem>> {
    Json(NavigationService::navigation_for(session.as_ref()))
}

/// Dashboard shell, only reachable past the route guard
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Shell of the dashboard", body = DashboardShell),
        (status = 307, description = "Redirect to login or home"),
        (status = 401, description = "Missing or unreadable session cookie", body = ErrorResponse),
    ),
    security(
        ("session_cookie" = [])
    ),
    tag = "Navigation"
)]
#[instrument(skip_all)]
pub async fn dashboard_shell(AuthUser(session): AuthUser) -> Json<DashboardShell> {
    Json(DashboardShell {
        user_name: session.user().name.clone(),
        role_label: session.role_label().to_string(),
        navigation: NavigationService::navigation_for(Some(&session)),
    })
}
