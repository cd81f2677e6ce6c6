//! The access-control matrix: resource × action → allowed roles.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::resource::Action;
use crate::role::Role;
use crate::role::Role::{Admin, Manager, Resident, Viewer};

static STANDARD: Lazy<AccessMatrix> = Lazy::new(standard_rules);

/// Static mapping from resource name and action to the set of roles
/// permitted to perform it.
///
/// The matrix is the single source of truth: a missing entry is an empty
/// role set, which denies every role. No role has implicit access and
/// gaps are never filled by privilege-rank comparison.
#[derive(Debug, Clone, Default)]
pub struct AccessMatrix {
    rules: HashMap<String, HashMap<Action, Vec<Role>>>,
}

impl AccessMatrix {
    /// The compiled-in matrix for the Vicinus back office.
    pub fn standard() -> &'static AccessMatrix {
        &STANDARD
    }

    /// An empty matrix (denies everything). Useful as a builder base for
    /// embedders and tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace the allowed role set for one resource/action pair.
    pub fn with_rule(
        mut self,
        resource: impl Into<String>,
        action: Action,
        roles: &[Role],
    ) -> Self {
        self.rules
            .entry(resource.into())
            .or_default()
            .insert(action, roles.to_vec());
        self
    }

    /// Roles allowed to perform `action` on `resource`. Unknown
    /// resources and actions yield the empty set.
    pub fn allowed_roles(&self, resource: &str, action: Action) -> &[Role] {
        self.rules
            .get(resource)
            .and_then(|actions| actions.get(&action))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True iff `role` may perform `action` on `resource`.
    pub fn allows(&self, resource: &str, action: Action, role: Role) -> bool {
        self.allowed_roles(resource, action).contains(&role)
    }
}

fn standard_rules() -> AccessMatrix {
    use crate::resource::Action::{Create, Delete, Edit, List, Show};
    use crate::resource::Resource::{
        Accounts, Fees, Properties, RecurrentVisitors, Residents, Users, Visitors,
    };

    AccessMatrix::empty()
        // Accounts: tenant records, admin-managed.
        .with_rule(Accounts.as_str(), List, &[Admin, Manager])
        .with_rule(Accounts.as_str(), Create, &[Admin])
        .with_rule(Accounts.as_str(), Edit, &[Admin])
        .with_rule(Accounts.as_str(), Show, &[Admin, Manager])
        .with_rule(Accounts.as_str(), Delete, &[Admin])
        // Users: back-office operators.
        .with_rule(Users.as_str(), List, &[Admin, Manager])
        .with_rule(Users.as_str(), Create, &[Admin, Manager])
        .with_rule(Users.as_str(), Edit, &[Admin, Manager])
        .with_rule(Users.as_str(), Show, &[Admin, Manager])
        .with_rule(Users.as_str(), Delete, &[Admin])
        // Properties.
        .with_rule(Properties.as_str(), List, &[Admin, Manager, Viewer])
        .with_rule(Properties.as_str(), Create, &[Admin, Manager])
        .with_rule(Properties.as_str(), Edit, &[Admin, Manager])
        .with_rule(Properties.as_str(), Show, &[Admin, Manager, Viewer, Resident])
        .with_rule(Properties.as_str(), Delete, &[Admin])
        // Residents.
        .with_rule(Residents.as_str(), List, &[Admin, Manager, Viewer])
        .with_rule(Residents.as_str(), Create, &[Admin, Manager])
        .with_rule(Residents.as_str(), Edit, &[Admin, Manager])
        .with_rule(Residents.as_str(), Show, &[Admin, Manager, Viewer, Resident])
        .with_rule(Residents.as_str(), Delete, &[Admin])
        // Visitors: gate staff (viewers) may register arrivals.
        .with_rule(Visitors.as_str(), List, &[Admin, Manager, Viewer])
        .with_rule(Visitors.as_str(), Create, &[Admin, Manager, Viewer])
        .with_rule(Visitors.as_str(), Edit, &[Admin, Manager])
        .with_rule(Visitors.as_str(), Show, &[Admin, Manager, Viewer])
        .with_rule(Visitors.as_str(), Delete, &[Admin, Manager])
        // Recurrent visitors.
        .with_rule(RecurrentVisitors.as_str(), List, &[Admin, Manager, Viewer])
        .with_rule(RecurrentVisitors.as_str(), Create, &[Admin, Manager, Viewer])
        .with_rule(RecurrentVisitors.as_str(), Edit, &[Admin, Manager])
        .with_rule(RecurrentVisitors.as_str(), Show, &[Admin, Manager, Viewer])
        .with_rule(RecurrentVisitors.as_str(), Delete, &[Admin, Manager])
        // Fees: residents can see their own statements.
        .with_rule(Fees.as_str(), List, &[Admin, Manager])
        .with_rule(Fees.as_str(), Create, &[Admin, Manager])
        .with_rule(Fees.as_str(), Edit, &[Admin, Manager])
        .with_rule(Fees.as_str(), Show, &[Admin, Manager, Resident])
        .with_rule(Fees.as_str(), Delete, &[Admin])
}
