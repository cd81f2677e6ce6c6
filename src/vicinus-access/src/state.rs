//! Loader-facing permissions state.

use serde::{Deserialize, Serialize};

use crate::record::PermissionRecord;
use crate::role::Role;

/// Tri-state output of the permissions loader, consumed by the evaluator.
///
/// A tagged enum rather than `Option<Option<_>>` or a nullable boolean:
/// the distinction between "not yet known" and "known to be signed out"
/// must survive the type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PermissionsState {
    /// A fetch is (or may be) in flight; nothing is known yet.
    Loading,
    /// No authenticated principal.
    Unauthenticated,
    /// The principal's permission record has been resolved.
    Loaded(PermissionRecord),
}

impl PermissionsState {
    /// Returns true while the loader has not settled.
    pub fn is_loading(&self) -> bool {
        matches!(self, PermissionsState::Loading)
    }

    /// Returns true once the loader has settled, whether or not a
    /// principal is present.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// The loaded record, if any.
    pub fn record(&self) -> Option<&PermissionRecord> {
        match self {
            PermissionsState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// The loaded role, if any.
    pub fn role(&self) -> Option<Role> {
        self.record().map(|r| r.role)
    }
}

impl Default for PermissionsState {
    fn default() -> Self {
        PermissionsState::Loading
    }
}
