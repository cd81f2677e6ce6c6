//! Vicinus Session - asynchronous permissions loading for the Vicinus
//! back office.
//!
//! Bridges the external identity subsystem and the pure evaluator in
//! `vicinus-access`:
//!
//! - [`AuthStream`] and [`ProfileStore`] are the seams to the outside
//!   world (auth-state transitions in, profile documents out).
//! - [`PermissionsLoader`] owns a background task that keeps a
//!   [`PermissionsState`] current across sign-in/sign-out transitions.
//! - [`PermissionsHandle`] is what views hold: snapshot reads, a
//!   `changed()` re-render hook, and the `can_access`/`has_role`/
//!   `has_permission`/`belongs_to_account` queries.
//!
//! Failure policy: nothing here returns an error to callers. A missing
//! profile, an unreachable store, or a timed-out fetch all resolve to
//! the least-privilege viewer record; a stale fetch resolving after a
//! later sign-out is discarded (last transition wins).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vicinus_access::{Action, Decision};
//! use vicinus_session::{AuthChannel, PermissionsLoader, ProfileStore};
//!
//! # async fn example(store: Arc<dyn ProfileStore>) {
//! let auth = AuthChannel::new();
//! let loader = PermissionsLoader::spawn(Arc::new(auth.clone()), store);
//! let mut permissions = loader.handle();
//!
//! auth.sign_in("principal-1");
//! while permissions.can_access("fees", Action::List) == Decision::Unknown {
//!     permissions.changed().await;
//! }
//! # }
//! ```

mod auth;
mod config;
mod handle;
mod loader;
mod profile;


// Re-export all public types
pub use auth::{AuthChannel, AuthEvent, AuthEvents, AuthStream, PrincipalId};
pub use config::LoaderConfig;
pub use handle::PermissionsHandle;
pub use loader::PermissionsLoader;
pub use profile::{ProfileDocument, ProfileStore, StoreError};

// Evaluator types consumers need alongside the handle
pub use vicinus_access::{Action, Decision, PermissionRecord, PermissionsState, Role};
