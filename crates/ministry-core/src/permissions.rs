//! Permission registry for the Ministry API.
//!
//! A permission is a `resource.action` pair such as `activites.create`. Both
//! halves are closed enumerations, so a misspelled permission is a compile
//! error at call sites and a parse error at the wire boundary.
//!
//! # Example
//!
//! ```ignore
//! use ministry_core::permissions::{self, Action, Permission, Resource};
//!
//! let permission = Permission::new(Resource::Salles, Action::Create);
//! assert_eq!(permission, permissions::SALLES_CREATE);
//! assert_eq!(permission.to_string(), "salles.create");
//! assert!("salles.fly".parse::<Permission>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Dashboard resources that can be gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Enfants,
    Moniteurs,
    Activites,
    Cotisations,
    Depenses,
    Rapports,
    Salles,
    Photos,
    Videos,
    Blog,
    Users,
    Roles,
}

impl Resource {
    pub const ALL: [Resource; 12] = [
        Resource::Enfants,
        Resource::Moniteurs,
        Resource::Activites,
        Resource::Cotisations,
        Resource::Depenses,
        Resource::Rapports,
        Resource::Salles,
        Resource::Photos,
        Resource::Videos,
        Resource::Blog,
        Resource::Users,
        Resource::Roles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Enfants => "enfants",
            Resource::Moniteurs => "moniteurs",
            Resource::Activites => "activites",
            Resource::Cotisations => "cotisations",
            Resource::Depenses => "depenses",
            Resource::Rapports => "rapports",
            Resource::Salles => "salles",
            Resource::Photos => "photos",
            Resource::Videos => "videos",
            Resource::Blog => "blog",
            Resource::Users => "users",
            Resource::Roles => "roles",
        }
    }
}

impl FromStr for Resource {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| PermissionParseError::UnknownResource(s.to_string()))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations a permission can grant on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Create, Action::Update, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl FromStr for Action {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| PermissionParseError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `resource.action` capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permission {
    pub resource: Resource,
    pub action: Action,
}

impl Permission {
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self { resource, action }
    }

    /// Every permission the registry knows about, resource-major.
    pub fn all() -> impl Iterator<Item = Permission> {
        Resource::ALL.into_iter().flat_map(|resource| {
            Action::ALL
                .into_iter()
                .map(move |action| Permission::new(resource, action))
        })
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once('.')
            .ok_or_else(|| PermissionParseError::Malformed(s.to_string()))?;

        Ok(Permission::new(resource.parse()?, action.parse()?))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionParseError {
    Malformed(String),
    UnknownResource(String),
    UnknownAction(String),
}

impl fmt::Display for PermissionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionParseError::Malformed(raw) => {
                write!(f, "Permission '{}' is not of the form resource.action", raw)
            }
            PermissionParseError::UnknownResource(raw) => write!(f, "Unknown resource '{}'", raw),
            PermissionParseError::UnknownAction(raw) => write!(f, "Unknown action '{}'", raw),
        }
    }
}

impl std::error::Error for PermissionParseError {}

// =============================================================================
// Enfants permissions
// =============================================================================

pub const ENFANTS_VIEW: Permission = Permission::new(Resource::Enfants, Action::View);
pub const ENFANTS_CREATE: Permission = Permission::new(Resource::Enfants, Action::Create);
pub const ENFANTS_UPDATE: Permission = Permission::new(Resource::Enfants, Action::Update);
pub const ENFANTS_DELETE: Permission = Permission::new(Resource::Enfants, Action::Delete);

// =============================================================================
// Moniteurs permissions
// =============================================================================

pub const MONITEURS_VIEW: Permission = Permission::new(Resource::Moniteurs, Action::View);
pub const MONITEURS_CREATE: Permission = Permission::new(Resource::Moniteurs, Action::Create);

// =============================================================================
// Activites permissions
// =============================================================================

pub const ACTIVITES_VIEW: Permission = Permission::new(Resource::Activites, Action::View);
pub const ACTIVITES_CREATE: Permission = Permission::new(Resource::Activites, Action::Create);

// =============================================================================
// Finance permissions
// =============================================================================

pub const COTISATIONS_VIEW: Permission = Permission::new(Resource::Cotisations, Action::View);
pub const COTISATIONS_CREATE: Permission = Permission::new(Resource::Cotisations, Action::Create);
pub const DEPENSES_VIEW: Permission = Permission::new(Resource::Depenses, Action::View);
pub const DEPENSES_CREATE: Permission = Permission::new(Resource::Depenses, Action::Create);

// =============================================================================
// Worship reports permissions
// =============================================================================

pub const RAPPORTS_VIEW: Permission = Permission::new(Resource::Rapports, Action::View);
pub const RAPPORTS_CREATE: Permission = Permission::new(Resource::Rapports, Action::Create);

// =============================================================================
// Salles permissions
// =============================================================================

pub const SALLES_VIEW: Permission = Permission::new(Resource::Salles, Action::View);
pub const SALLES_CREATE: Permission = Permission::new(Resource::Salles, Action::Create);

// =============================================================================
// Media permissions
// =============================================================================

pub const PHOTOS_VIEW: Permission = Permission::new(Resource::Photos, Action::View);
pub const PHOTOS_CREATE: Permission = Permission::new(Resource::Photos, Action::Create);
pub const VIDEOS_VIEW: Permission = Permission::new(Resource::Videos, Action::View);
pub const VIDEOS_CREATE: Permission = Permission::new(Resource::Videos, Action::Create);
pub const BLOG_VIEW: Permission = Permission::new(Resource::Blog, Action::View);
pub const BLOG_CREATE: Permission = Permission::new(Resource::Blog, Action::Create);

// =============================================================================
// Users and roles permissions
// =============================================================================

pub const USERS_VIEW: Permission = Permission::new(Resource::Users, Action::View);
pub const USERS_CREATE: Permission = Permission::new(Resource::Users, Action::Create);
pub const ROLES_VIEW: Permission = Permission::new(Resource::Roles, Action::View);
