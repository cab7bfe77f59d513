//! # Ministry Models
//!
//! Domain models and DTOs for the Ministry API.
//!
//! - [`roles`]: The closed role enumeration and its display labels
//! - [`users`]: The user record carried by the session cookie
//! - [`access`]: Request/response DTOs of the access API
//!
//! # Example
//!
//! ```ignore
//! use ministry_models::roles::{Role, label_for};
//!
//! assert_eq!(label_for(Role::ChefSalle), "Chef de salle");
//! assert!(Role::SuperAdmin.is_super());
//! ```

pub mod access;
pub mod roles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use access::{
    ErrorResponse, NavigationItem, PermissionCheckRequest, PermissionCheckResponse, SessionResponse,
};
pub use roles::{Role, RoleOption, label_for};
pub use users::SessionUser;
