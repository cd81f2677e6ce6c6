//! Access evaluation over the current permissions state.

use crate::decision::Decision;
use crate::matrix::AccessMatrix;
use crate::resource::Action;
use crate::state::PermissionsState;

/// Evaluates (resource, action) queries against a matrix and the current
/// permissions state.
///
/// Pure and total: evaluation itself cannot fail. Every upstream failure
/// mode (fetch errors, timeouts, missing profiles) is absorbed by the
/// loader into a well-formed `PermissionsState` before it gets here.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    matrix: AccessMatrix,
}

impl AccessPolicy {
    /// Policy over the standard compiled-in matrix.
    pub fn new() -> Self {
        Self {
            matrix: AccessMatrix::standard().clone(),
        }
    }

    /// Policy over a custom matrix.
    pub fn with_matrix(matrix: AccessMatrix) -> Self {
        Self { matrix }
    }

    /// The matrix this policy evaluates against.
    pub fn matrix(&self) -> &AccessMatrix {
        &self.matrix
    }

    /// Decide whether the current principal may perform `action` on
    /// `resource`.
    ///
    /// Unsettled state never produces a denial: both `Loading` and
    /// `Unauthenticated` evaluate to `Unknown`, so a view shows its
    /// loading placeholder rather than a spurious "no permission"
    /// message while data is still in flight. A `Denied` only ever
    /// reflects a confirmed role check against the matrix.
    pub fn can_access(
        &self,
        state: &PermissionsState,
        resource: &str,
        action: Action,
    ) -> Decision {
        let Some(record) = state.record() else {
            return Decision::Unknown;
        };

        // Account-scoped principals are further restricted to their own
        // account's records, but that filtering lives in the data layer
        // and the backend rule engine; the scope never changes the
        // visibility decision made here.
        if self.matrix.allows(resource, action, record.role) {
            Decision::Allowed
        } else {
            Decision::Denied
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}
