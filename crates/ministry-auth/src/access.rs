//! Permission resolver.
//!
//! These functions take an optional session so call sites never branch on
//! authentication themselves: no session means nothing is granted. They are
//! pure and never fail.

use ministry_core::Permission;

use crate::session::Session;

pub fn can(session: Option<&Session>, permission: Permission) -> bool {
    session.is_some_and(|s| s.can(permission))
}

pub fn can_named(session: Option<&Session>, permission: &str) -> bool {
    session.is_some_and(|s| s.can_named(permission))
}

pub fn can_any(session: Option<&Session>, permissions: &[Permission]) -> bool {
    session.is_some_and(|s| s.can_any(permissions))
}

pub fn can_all(session: Option<&Session>, permissions: &[Permission]) -> bool {
    session.is_some_and(|s| s.can_all(permissions))
}

/// Whether the session may enter the dashboard at all.
///
/// This is the coarse gate used by the route guard: only super roles pass.
pub fn dashboard_access(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_super)
}
