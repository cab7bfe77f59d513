//! DTOs for the session and access endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::SessionUser;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub role_label: String,
    pub is_super: bool,
    /// Permission strings listed in the session cookie.
    #[schema(example = json!(["activites.create"]))]
    pub permissions: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PermissionCheckRequest {
    #[validate(length(min = 3, max = 64, message = "permission must be 3 to 64 characters"))]
    #[schema(example = "activites.create")]
    pub permission: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub permission: String,
    pub granted: bool,
}

/// A dashboard menu entry the session is allowed to see.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
    pub resource: String,
    /// Whether the "Add" control of the page should be shown.
    pub can_create: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
