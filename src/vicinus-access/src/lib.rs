//! Vicinus Access - RBAC evaluation for the Vicinus back office.
//!
//! This crate decides whether the current principal may perform an action
//! on a resource:
//! - `Allowed` - The principal's role grants access
//! - `Denied` - The role check failed against the access matrix
//! - `Unknown` - Permissions have not settled yet; show a loading state
//!
//! # Evaluation
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │         can_access(resource, action)        │
//! └────────────────────┬───────────────────────┘
//!                      │
//!                      ▼
//! ┌────────────────────────────────────────────┐
//! │   Permissions loaded for a principal?      │
//! └────────────────────┬───────────────────────┘
//!                      │
//!        ┌─────────────┴─────────────┐
//!        ▼                           ▼
//!      [No]                        [Yes]
//!        │                           │
//!        ▼                           ▼
//!   ┌─────────┐              ┌─────────────────┐
//!   │ UNKNOWN │              │ role ∈ matrix   │
//!   └─────────┘              │ [resource][act]?│
//!                            └────────┬────────┘
//!                                     │
//!                       ┌─────────────┴─────────────┐
//!                       ▼                           ▼
//!                     [Yes]                        [No]
//!                       │                           │
//!                       ▼                           ▼
//!                  ┌─────────┐                ┌─────────┐
//!                  │ ALLOWED │                │ DENIED  │
//!                  └─────────┘                └─────────┘
//! ```
//!
//! Everything here is pure and synchronous; the asynchronous loading of
//! the permissions state lives in `vicinus-session`.

mod decision;
mod matrix;
pub mod messages;
mod policy;
mod record;
mod resource;
mod role;
mod state;


// Re-export all public types
pub use decision::Decision;
pub use matrix::AccessMatrix;
pub use messages::{Locale, denial_message};
pub use policy::AccessPolicy;
pub use record::PermissionRecord;
pub use resource::{Action, Resource};
pub use role::Role;
pub use state::PermissionsState;

// ============================================================================
// Convenience Functions
// ============================================================================

/// Quick evaluation against the standard matrix.
pub fn can_access(state: &PermissionsState, resource: &str, action: Action) -> Decision {
    AccessPolicy::new().can_access(state, resource, action)
}
