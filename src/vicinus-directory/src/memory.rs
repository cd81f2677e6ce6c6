//! In-memory profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use vicinus_session::{PrincipalId, ProfileDocument, ProfileStore, StoreError};

/// In-memory [`ProfileStore`].
///
/// For tests and for embedders that provision profiles from elsewhere
/// at startup. No persistence.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    profiles: RwLock<HashMap<String, ProfileDocument>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a principal's profile document.
    pub fn upsert(&self, principal: impl Into<PrincipalId>, document: ProfileDocument) {
        self.profiles
            .write()
            .insert(principal.into().as_str().to_string(), document);
    }

    /// Remove a principal's profile document. Returns whether one
    /// existed.
    pub fn remove(&self, principal: &PrincipalId) -> bool {
        self.profiles.write().remove(principal.as_str()).is_some()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryDirectory {
    async fn fetch_profile(
        &self,
        principal: &PrincipalId,
    ) -> Result<Option<ProfileDocument>, StoreError> {
        Ok(self.profiles.read().get(principal.as_str()).cloned())
    }
}
