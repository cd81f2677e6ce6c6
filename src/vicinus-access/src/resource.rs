//! Back-office resources and the actions that can be performed on them.

use serde::{Deserialize, Serialize};

/// Action on a resource, as understood by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    List,
    Create,
    Edit,
    Show,
    Delete,
}

impl Action {
    /// All actions.
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Create,
        Action::Edit,
        Action::Show,
        Action::Delete,
    ];

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Show => "show",
            Action::Delete => "delete",
        }
    }

    /// Parse an action name. Unknown actions are not an error at the
    /// evaluation surface (they simply deny); this is for callers that
    /// route by string.
    pub fn parse(s: &str) -> Option<Action> {
        match s {
            "list" => Some(Action::List),
            "create" => Some(Action::Create),
            "edit" => Some(Action::Edit),
            "show" => Some(Action::Show),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resources managed by the back office.
///
/// Evaluation accepts arbitrary resource strings (unknown ones deny);
/// this enum names the resources the standard matrix and the denial
/// message catalog know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Accounts,
    Users,
    Properties,
    Residents,
    Visitors,
    RecurrentVisitors,
    Fees,
}

impl Resource {
    /// All known resources.
    pub const ALL: [Resource; 7] = [
        Resource::Accounts,
        Resource::Users,
        Resource::Properties,
        Resource::Residents,
        Resource::Visitors,
        Resource::RecurrentVisitors,
        Resource::Fees,
    ];

    /// Stable snake_case name, matching route and collection names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Accounts => "accounts",
            Resource::Users => "users",
            Resource::Properties => "properties",
            Resource::Residents => "residents",
            Resource::Visitors => "visitors",
            Resource::RecurrentVisitors => "recurrent_visitors",
            Resource::Fees => "fees",
        }
    }

    /// Parse a resource name.
    pub fn parse(s: &str) -> Option<Resource> {
        match s {
            "accounts" => Some(Resource::Accounts),
            "users" => Some(Resource::Users),
            "properties" => Some(Resource::Properties),
            "residents" => Some(Resource::Residents),
            "visitors" => Some(Resource::Visitors),
            "recurrent_visitors" => Some(Resource::RecurrentVisitors),
            "fees" => Some(Resource::Fees),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
