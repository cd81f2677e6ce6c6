//! Authentication state stream.
//!
//! The loader never talks to the identity provider directly; it observes
//! an [`AuthStream`], the seam behind which the real auth subsystem
//! (or a test double) lives. [`AuthChannel`] is the in-process
//! implementation used to bridge whatever SDK actually authenticates the
//! operator.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// Opaque unique identifier of an authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrincipalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PrincipalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Authentication state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A principal signed in (or a restored session became known).
    SignedIn(PrincipalId),
    /// The current principal signed out.
    SignedOut,
}

/// Subscription to auth transitions, delivered in emission order.
pub type AuthEvents = mpsc::UnboundedReceiver<AuthEvent>;

/// External authentication state, as the loader sees it.
#[async_trait]
pub trait AuthStream: Send + Sync {
    /// Resolves once the auth subsystem knows whether a principal is
    /// present. May resolve immediately if the initial state is already
    /// known.
    async fn ready(&self);

    /// Subscribe to subsequent auth transitions.
    fn subscribe(&self) -> AuthEvents;

    /// The currently known principal, if any.
    fn current_principal(&self) -> Option<PrincipalId>;
}

/// In-process [`AuthStream`] implementation.
///
/// The embedding application pushes transitions into it from whatever
/// identity SDK it uses; the loader consumes them. Cheap to clone.
#[derive(Clone)]
pub struct AuthChannel {
    inner: Arc<AuthChannelInner>,
}

struct AuthChannelInner {
    current: RwLock<Option<PrincipalId>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthEvent>>>,
    ready: watch::Sender<bool>,
}

impl AuthChannel {
    /// Channel whose initial auth state is not yet known. `ready()`
    /// resolves on the first transition.
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            inner: Arc::new(AuthChannelInner {
                current: RwLock::new(None),
                subscribers: Mutex::new(Vec::new()),
                ready,
            }),
        }
    }

    /// Channel that already knows a principal is signed in.
    pub fn signed_in(principal: impl Into<PrincipalId>) -> Self {
        let channel = Self::new();
        channel.set_current(Some(principal.into()));
        channel
    }

    /// Channel that already knows no principal is present.
    pub fn signed_out() -> Self {
        let channel = Self::new();
        channel.set_current(None);
        channel
    }

    /// Report a sign-in. Marks the channel ready and notifies
    /// subscribers.
    pub fn sign_in(&self, principal: impl Into<PrincipalId>) {
        let principal = principal.into();
        debug!(principal = %principal, "auth: signed in");
        self.set_current(Some(principal.clone()));
        self.broadcast(AuthEvent::SignedIn(principal));
    }

    /// Report a sign-out. Marks the channel ready and notifies
    /// subscribers.
    pub fn sign_out(&self) {
        debug!("auth: signed out");
        self.set_current(None);
        self.broadcast(AuthEvent::SignedOut);
    }

    fn set_current(&self, principal: Option<PrincipalId>) {
        *self.inner.current.write() = principal;
        self.inner.ready.send_replace(true);
    }

    fn broadcast(&self, event: AuthEvent) {
        // Drop subscribers whose receiving side is gone.
        self.inner
            .subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for AuthChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthStream for AuthChannel {
    async fn ready(&self) {
        let mut rx = self.inner.ready.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    fn subscribe(&self) -> AuthEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    fn current_principal(&self) -> Option<PrincipalId> {
        self.inner.current.read().clone()
    }
}
