use ministry_config::session::DEFAULT_COOKIE_NAME;
use ministry_models::{
    ErrorResponse, NavigationItem, PermissionCheckRequest, PermissionCheckResponse, Role,
    RoleOption, SessionResponse, SessionUser,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::navigation::controller::DashboardShell;
use crate::modules::site::controller::PageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::site::controller::home,
        crate::modules::site::controller::login,
        crate::modules::site::controller::blog_public,
        crate::modules::session::controller::get_session,
        crate::modules::session::controller::check_permission,
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_permissions,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::dashboard_shell,
    ),
    components(
        schemas(
            Role,
            RoleOption,
            SessionUser,
            SessionResponse,
            PermissionCheckRequest,
            PermissionCheckResponse,
            NavigationItem,
            DashboardShell,
            PageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Site", description = "Public pages"),
        (name = "Session", description = "Current session and permission checks"),
        (name = "Roles", description = "Role and permission registry"),
        (name = "Navigation", description = "Permission-gated dashboard navigation")
    ),
    info(
        title = "Ministry API",
        version = "0.1.0",
        description = "Session, permission and route guard layer of the ministry dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(DEFAULT_COOKIE_NAME))),
            )
        }
    }
}
