//! Role registry.
//!
//! Roles are a closed set. Each one has a wire name (what the session cookie
//! and the API carry) and a display label used for pickers. Labels carry no
//! authorization meaning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
    Coordination,
    ChefSalle,
    Moniteur,
    Financier,
    Parent,
    Enfant,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Admin,
        Role::SuperAdmin,
        Role::Coordination,
        Role::ChefSalle,
        Role::Moniteur,
        Role::Financier,
        Role::Parent,
        Role::Enfant,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
            Role::Coordination => "coordination",
            Role::ChefSalle => "chef_salle",
            Role::Moniteur => "moniteur",
            Role::Financier => "financier",
            Role::Parent => "parent",
            Role::Enfant => "enfant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::SuperAdmin => "Super administrateur",
            Role::Coordination => "Coordination",
            Role::ChefSalle => "Chef de salle",
            Role::Moniteur => "Moniteur",
            Role::Financier => "Financier",
            Role::Parent => "Parent",
            Role::Enfant => "Enfant",
        }
    }

    /// Super roles bypass explicit permission lists.
    pub fn is_super(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

/// Display label of a role.
pub fn label_for(role: Role) -> &'static str {
    role.label()
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// One entry of a role picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleOption {
    pub value: Role,
    pub label: String,
}

impl RoleOption {
    pub fn all() -> Vec<RoleOption> {
        Role::ALL.into_iter().map(RoleOption::from).collect()
    }
}

impl From<Role> for RoleOption {
    fn from(role: Role) -> Self {
        Self {
            value: role,
            label: role.label().to_string(),
        }
    }
}
