//! The permissions loader lifecycle.
//!
//! One background task owns the permissions state and keeps it current
//! across sign-in/sign-out transitions. Consumers read through cheap
//! [`PermissionsHandle`]s; the state itself is replaced atomically, so
//! readers always see a complete record, never a partial update.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

use vicinus_access::{PermissionRecord, PermissionsState};

use crate::auth::{AuthEvent, AuthStream, PrincipalId};
use crate::config::LoaderConfig;
use crate::handle::PermissionsHandle;
use crate::profile::ProfileStore;

/// Owns the background task that keeps [`PermissionsState`] current.
///
/// Dropping the loader aborts the task; the last published state remains
/// visible to existing handles but will never change again.
pub struct PermissionsLoader {
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

struct Shared {
    auth: Arc<dyn AuthStream>,
    store: Arc<dyn ProfileStore>,
    config: LoaderConfig,
    tx: watch::Sender<PermissionsState>,
    /// Bumped on every auth transition. A fetch result may only be
    /// published while its generation is still current, so a stale fetch
    /// can never overwrite the state left by a later sign-out.
    generation: AtomicU64,
}

impl PermissionsLoader {
    /// Start the loader with the default configuration.
    pub fn spawn(auth: Arc<dyn AuthStream>, store: Arc<dyn ProfileStore>) -> Self {
        Self::spawn_with_config(auth, store, LoaderConfig::default())
    }

    /// Start the loader.
    ///
    /// The initial state is `Loading`. If the auth subsystem already
    /// knows a principal, their profile fetch begins immediately;
    /// otherwise the loader waits (bounded by
    /// [`LoaderConfig::principal_wait`]) before settling to
    /// `Unauthenticated`.
    pub fn spawn_with_config(
        auth: Arc<dyn AuthStream>,
        store: Arc<dyn ProfileStore>,
        config: LoaderConfig,
    ) -> Self {
        let (tx, _) = watch::channel(PermissionsState::Loading);
        let shared = Arc::new(Shared {
            auth,
            store,
            config,
            tx,
            generation: AtomicU64::new(0),
        });
        let task = tokio::spawn(run(Arc::clone(&shared)));
        Self { shared, task }
    }

    /// A read handle for views. Cheap to clone.
    pub fn handle(&self) -> PermissionsHandle {
        PermissionsHandle::new(self.shared.tx.subscribe())
    }

    /// Current state snapshot.
    pub fn state(&self) -> PermissionsState {
        self.shared.tx.borrow().clone()
    }

    /// Stop reacting to auth transitions. The current state stays
    /// visible to existing handles.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for PermissionsLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(shared: Arc<Shared>) {
    // Subscribe before the initial check so no transition is missed
    // between "look at current principal" and "start listening".
    let mut events = shared.auth.subscribe();

    match wait_for_principal(&shared).await {
        Some(principal) => {
            let generation = next_generation(&shared);
            spawn_fetch(Arc::clone(&shared), principal, generation);
        }
        None => {
            let generation = shared.generation.load(Ordering::SeqCst);
            publish(&shared, generation, PermissionsState::Unauthenticated);
        }
    }

    while let Some(event) = events.recv().await {
        match event {
            AuthEvent::SignedIn(principal) => {
                let generation = next_generation(&shared);
                debug!(principal = %principal, generation, "auth transition: signed in");
                spawn_fetch(Arc::clone(&shared), principal, generation);
            }
            AuthEvent::SignedOut => {
                let generation = next_generation(&shared);
                debug!(generation, "auth transition: signed out");
                publish(&shared, generation, PermissionsState::Unauthenticated);
            }
        }
    }

    debug!("auth stream closed, permissions loader stopping");
}

/// Resolve the current principal, tolerating an auth subsystem that has
/// not finished restoring its session yet.
///
/// One bounded wait-for-ready-or-timeout; no retry chains. After the
/// timeout the best-known state wins, possibly none.
async fn wait_for_principal(shared: &Shared) -> Option<PrincipalId> {
    if let Some(principal) = shared.auth.current_principal() {
        return Some(principal);
    }

    if timeout(shared.config.principal_wait(), shared.auth.ready())
        .await
        .is_err()
    {
        debug!(
            wait_ms = shared.config.principal_wait_ms,
            "auth readiness wait timed out"
        );
    }
    shared.auth.current_principal()
}

fn next_generation(shared: &Shared) -> u64 {
    shared.generation.fetch_add(1, Ordering::SeqCst) + 1
}

/// Publish `state` unless a later auth transition has superseded
/// `generation`. Returns whether the state was accepted.
fn publish(shared: &Shared, generation: u64, state: PermissionsState) -> bool {
    shared.tx.send_if_modified(|current| {
        // Checked under the watch lock so a concurrent transition
        // cannot interleave between the check and the write.
        if shared.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        if *current == state {
            return false;
        }
        *current = state;
        true
    })
}

fn spawn_fetch(shared: Arc<Shared>, principal: PrincipalId, generation: u64) {
    tokio::spawn(async move {
        let state = fetch_permissions(&shared, &principal).await;
        if publish(&shared, generation, state) {
            debug!(principal = %principal, "permissions updated");
        } else {
            debug!(principal = %principal, "stale permission fetch discarded");
        }
    });
}

/// Fetch and resolve a principal's permission record.
///
/// Infallible by policy: a missing document, a store error, and a
/// timeout all degrade to the least-privilege viewer record instead of
/// surfacing an error. A freshly provisioned principal with no profile
/// yet still gets a usable, minimally privileged session.
async fn fetch_permissions(shared: &Shared, principal: &PrincipalId) -> PermissionsState {
    debug!(principal = %principal, "fetching profile");

    let record = match timeout(
        shared.config.fetch_timeout(),
        shared.store.fetch_profile(principal),
    )
    .await
    {
        Ok(Ok(Some(document))) => document.into_record(),
        Ok(Ok(None)) => {
            debug!(principal = %principal, "no profile document, using viewer fallback");
            PermissionRecord::viewer_fallback()
        }
        Ok(Err(error)) => {
            warn!(principal = %principal, error = %error, "profile fetch failed, using viewer fallback");
            PermissionRecord::viewer_fallback()
        }
        Err(_) => {
            warn!(
                principal = %principal,
                timeout_ms = shared.config.fetch_timeout_ms,
                "profile fetch timed out, using viewer fallback"
            );
            PermissionRecord::viewer_fallback()
        }
    };

    PermissionsState::Loaded(record)
}
