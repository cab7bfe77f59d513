//! # Ministry Core
//!
//! Core types shared by every Ministry crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Closed registry of `resource.action` permissions
//!
//! # Example
//!
//! ```ignore
//! use ministry_core::permissions::{self, Permission};
//! use ministry_core::AppError;
//!
//! let parsed: Permission = "activites.create".parse()?;
//! assert_eq!(parsed, permissions::ACTIVITES_CREATE);
//!
//! let error = AppError::forbidden("Missing permission");
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{Action, Permission, PermissionParseError, Resource};
