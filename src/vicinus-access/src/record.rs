//! The resolved permission record for a principal.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Authoritative snapshot of a principal's access rights.
///
/// Owned by the permissions loader; views only ever read it. Updates are
/// whole-record replacements, never partial mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Role granted to the principal.
    pub role: Role,

    /// Account (tenant) the principal is scoped to. `None` for global
    /// principals such as platform admins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Supplementary free-form permission grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

impl PermissionRecord {
    /// Record with the given role and no account scope or extra grants.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            account_id: None,
            permissions: Vec::new(),
        }
    }

    /// Scope the record to an account.
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Add a supplementary permission grant.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    /// The least-privilege fallback record used when a principal's
    /// profile is missing or cannot be fetched.
    pub fn viewer_fallback() -> Self {
        Self::new(Role::Viewer)
    }

    /// True iff the record's role is in the given set.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// True iff the record carries the named supplementary grant.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// True iff both the record and the argument carry an account id and
    /// they are equal. Absent on either side means "not this account".
    pub fn belongs_to_account(&self, account_id: Option<&str>) -> bool {
        match (self.account_id.as_deref(), account_id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

impl Default for PermissionRecord {
    fn default() -> Self {
        Self::viewer_fallback()
    }
}
