//! Loader configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the permissions loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// How long to wait, in milliseconds, for the auth subsystem to
    /// report whether a principal is present before concluding none is.
    /// Covers the window where a restored session reports "signed in"
    /// slightly after startup.
    pub principal_wait_ms: u64,

    /// Upper bound, in milliseconds, on a single profile fetch. A fetch
    /// that exceeds it resolves to the viewer fallback like any other
    /// store failure.
    pub fetch_timeout_ms: u64,
}

impl LoaderConfig {
    pub fn principal_wait(&self) -> Duration {
        Duration::from_millis(self.principal_wait_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            principal_wait_ms: 3_000,
            fetch_timeout_ms: 5_000,
        }
    }
}
