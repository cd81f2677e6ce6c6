//! Read surface for views.

use tokio::sync::watch;

use vicinus_access::{AccessPolicy, Action, Decision, PermissionRecord, PermissionsState, Role};

/// Cheap, clonable read handle onto the loader's state.
///
/// Every read sees either the old or the new complete state, never a
/// partial update. Views re-render on [`PermissionsHandle::changed`].
#[derive(Debug, Clone)]
pub struct PermissionsHandle {
    rx: watch::Receiver<PermissionsState>,
    policy: AccessPolicy,
}

impl PermissionsHandle {
    pub(crate) fn new(rx: watch::Receiver<PermissionsState>) -> Self {
        Self {
            rx,
            policy: AccessPolicy::new(),
        }
    }

    /// Evaluate against a custom policy instead of the standard matrix.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current state snapshot.
    pub fn state(&self) -> PermissionsState {
        self.rx.borrow().clone()
    }

    /// Wait for the next state transition. Returns `false` once the
    /// loader is gone and no further transitions will happen.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Decide whether the current principal may perform `action` on
    /// `resource`. `Unknown` while permissions are unsettled.
    pub fn can_access(&self, resource: &str, action: Action) -> Decision {
        self.policy.can_access(&self.rx.borrow(), resource, action)
    }

    /// True iff a record is loaded and its role is in the given set.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.rx
            .borrow()
            .record()
            .is_some_and(|record| record.has_role(roles))
    }

    /// True iff a record is loaded and carries the named supplementary
    /// grant.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.rx
            .borrow()
            .record()
            .is_some_and(|record| record.has_permission(permission))
    }

    /// True iff a record is loaded, both account ids are present, and
    /// they match.
    pub fn belongs_to_account(&self, account_id: Option<&str>) -> bool {
        self.rx
            .borrow()
            .record()
            .is_some_and(|record| record.belongs_to_account(account_id))
    }

    /// The loaded permission record, for views that display the raw
    /// role or account.
    pub fn record(&self) -> Option<PermissionRecord> {
        self.rx.borrow().record().cloned()
    }
}
