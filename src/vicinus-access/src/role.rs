//! Principal roles.

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Resident,
    Viewer,
}

impl Role {
    /// All roles, highest privilege first.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Resident, Role::Viewer];

    /// Parse a stored role string, falling back to the least-privilege
    /// role for anything unrecognized. Profile documents are external
    /// data; an unknown role must degrade, not error.
    pub fn parse_or_default(s: &str) -> Role {
        match s {
            "admin" => Role::Admin,
            "manager" => Role::Manager,
            "resident" => Role::Resident,
            "viewer" => Role::Viewer,
            _ => Role::default(),
        }
    }

    /// Numeric privilege rank (`admin` = 4 down to `viewer` = 1).
    ///
    /// Reserved for future use. Evaluation is strictly set-membership
    /// against the access matrix; the rank never fills matrix gaps.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Admin => 4,
            Role::Manager => 3,
            Role::Resident => 2,
            Role::Viewer => 1,
        }
    }

    /// Stable lowercase name, matching the stored document format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Resident => "resident",
            Role::Viewer => "viewer",
        }
    }
}

impl Default for Role {
    /// The least-privilege fallback role.
    fn default() -> Self {
        Role::Viewer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
