//! Middleware and extractors for sessions and authorization.
//!
//! - [`session`]: Decodes the session cookie once per request
//! - [`guard`]: Redirects unauthorized dashboard requests before routing
//! - [`auth`]: Session extractors and permission-gated extractors
//!
//! # Request Flow
//!
//! 1. `load_session` reads the `auth_user` cookie into a `SessionLoad`
//! 2. `route_guard` allows or redirects requests under `/dashboard`
//! 3. Handlers take `CurrentSession`, `AuthUser` or a `Require*` extractor
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{CurrentSession, RequireUsersCreate};
//!
//! async fn roles(RequireUsersCreate(auth_user): RequireUsersCreate) -> impl IntoResponse {
//!     // Only runs if the session is granted "users.create"
//! }
//! ```

pub mod auth;
pub mod guard;
pub mod session;
