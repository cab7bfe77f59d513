//! The resolved session of a request.

use std::collections::BTreeSet;

use ministry_core::Permission;
use ministry_models::{Role, SessionUser};
use tracing::debug;

/// A user taken from the session cookie.
///
/// The permission list is kept twice: the exact strings the backend wrote,
/// matched by equality in [`Session::can_named`], and the subset the registry
/// recognises, used by the typed checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: SessionUser,
    names: Vec<String>,
    permissions: BTreeSet<Permission>,
}

impl Session {
    pub fn from_user(user: SessionUser) -> Self {
        let mut names: Vec<String> = Vec::new();
        let mut permissions = BTreeSet::new();

        for raw in user.permissions.iter().flatten() {
            if names.contains(raw) {
                continue;
            }
            names.push(raw.clone());

            match raw.parse::<Permission>() {
                Ok(permission) => {
                    permissions.insert(permission);
                }
                Err(err) => {
                    debug!(permission = %raw, reason = %err, "Permission outside the registry, matched by name only");
                }
            }
        }

        Self {
            user,
            names,
            permissions,
        }
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn into_user(self) -> SessionUser {
        self.user
    }

    /// `None` when the cookie carries a role this service does not know.
    pub fn role(&self) -> Option<Role> {
        self.user.role
    }

    /// Wire name of the role, `"unknown"` for unrecognised roles.
    pub fn role_name(&self) -> &'static str {
        self.user.role.map(|role| role.as_str()).unwrap_or("unknown")
    }

    pub fn role_label(&self) -> &'static str {
        self.user.role.map(|role| role.label()).unwrap_or_default()
    }

    pub fn is_super(&self) -> bool {
        self.user.role.is_some_and(|role| role.is_super())
    }

    /// Registry permissions granted explicitly, in registry order.
    pub fn permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    /// Every permission string listed in the cookie, duplicates removed.
    pub fn permission_names(&self) -> &[String] {
        &self.names
    }

    /// Super roles are granted everything; other roles only what they list.
    pub fn can(&self, permission: Permission) -> bool {
        self.is_super() || self.permissions.contains(&permission)
    }

    /// Same as [`Session::can`] for a permission string, compared by
    /// equality against the listed strings.
    pub fn can_named(&self, permission: &str) -> bool {
        self.is_super() || self.names.iter().any(|name| name == permission)
    }

    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.can(*p))
    }

    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.can(*p))
    }
}

impl From<SessionUser> for Session {
    fn from(user: SessionUser) -> Self {
        Session::from_user(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ministry_core::permissions;

    fn session(role: Role, permissions: &[&str]) -> Session {
        Session::from_user(
            SessionUser::new(1, "Test", "test@example.org", role)
                .with_permissions(permissions.iter().copied()),
        )
    }

    #[test]
    fn test_unregistered_permissions_match_by_name() {
        let session = session(
            Role::Moniteur,
            &["activites.create", "rapports.export", "activites.edit"],
        );

        let typed: Vec<Permission> = session.permissions().collect();
        assert_eq!(typed, vec![permissions::ACTIVITES_CREATE]);
        assert_eq!(session.permission_names().len(), 3);

        assert!(session.can_named("rapports.export"));
        assert!(session.can_named("activites.edit"));
        assert!(session.can_named("activites.create"));
        assert!(!session.can_named("rapports.view"));
        assert!(!session.can_named("Rapports.export"));
    }

    #[test]
    fn test_unknown_role_is_never_super() {
        let user: SessionUser =
            serde_json::from_str(r#"{"role":"pasteur","permissions":["salles.view"]}"#).unwrap();
        let session = Session::from_user(user);

        assert_eq!(session.role(), None);
        assert_eq!(session.role_name(), "unknown");
        assert!(!session.is_super());
        assert!(session.can(permissions::SALLES_VIEW));
        assert!(!session.can(permissions::USERS_CREATE));
        assert!(!session.can_named("anything.at_all"));
    }

    #[test]
    fn test_can_any_and_all() {
        let session = session(Role::Financier, &["cotisations.view", "depenses.view"]);

        assert!(session.can_any(&[permissions::USERS_CREATE, permissions::DEPENSES_VIEW]));
        assert!(!session.can_any(&[permissions::USERS_CREATE, permissions::SALLES_CREATE]));
        assert!(session.can_all(&[permissions::COTISATIONS_VIEW, permissions::DEPENSES_VIEW]));
        assert!(!session.can_all(&[permissions::COTISATIONS_VIEW, permissions::DEPENSES_CREATE]));
    }

    #[test]
    fn test_super_role_ignores_list() {
        let session = session(Role::SuperAdmin, &[]);

        assert!(session.can(permissions::USERS_CREATE));
        assert!(session.can_named("anything.at_all"));
        assert!(session.can_all(&[permissions::ROLES_VIEW, permissions::VIDEOS_CREATE]));
    }

    #[test]
    fn test_duplicate_permissions_collapse() {
        let session = session(Role::ChefSalle, &["salles.create", "salles.create"]);
        assert_eq!(session.permissions().count(), 1);
        assert_eq!(session.permission_names(), ["salles.create".to_string()]);
    }
}
