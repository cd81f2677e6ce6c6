//! Access decision types.

use serde::{Deserialize, Serialize};

/// Outcome of an access-control evaluation.
///
/// Three-valued by design: callers must be able to tell "still deciding"
/// apart from "denied" so a view can render a loading placeholder instead
/// of flashing a denial message while permissions are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Permissions have not settled yet; no decision can be made.
    Unknown,
    /// The principal's role is not in the allowed set.
    Denied,
    /// The principal's role grants access.
    Allowed,
}

impl Decision {
    /// Returns true if access is granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    /// Returns true if access is refused by a confirmed role check.
    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied)
    }

    /// Returns true if the decision is still pending.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Decision::Unknown)
    }

    /// Returns true once the decision is no longer pending.
    pub fn is_settled(&self) -> bool {
        !self.is_unknown()
    }

    /// Combine two decisions for a view that gates on several checks.
    ///
    /// A confirmed denial wins over everything; otherwise any pending
    /// check keeps the combined result pending.
    pub fn combine(self, other: Decision) -> Decision {
        match (self, other) {
            (Decision::Denied, _) | (_, Decision::Denied) => Decision::Denied,
            (Decision::Unknown, _) | (_, Decision::Unknown) => Decision::Unknown,
            _ => Decision::Allowed,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Unknown => write!(f, "UNKNOWN"),
            Decision::Denied => write!(f, "DENIED"),
            Decision::Allowed => write!(f, "ALLOWED"),
        }
    }
}
