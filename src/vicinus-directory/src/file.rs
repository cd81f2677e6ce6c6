//! JSON-file-backed profile store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use vicinus_session::{PrincipalId, ProfileDocument, ProfileStore, StoreError};

use crate::error::{DirectoryError, Result};
use crate::paths::DirectoryPaths;

/// Profile store persisted as one JSON document map on disk.
///
/// An explicitly constructed client with an explicit lifecycle: nothing
/// works before [`FileDirectory::init`], and [`FileDirectory::dispose`]
/// flushes and detaches. Constructed once at startup and injected into
/// the permissions loader.
#[derive(Debug)]
pub struct FileDirectory {
    paths: DirectoryPaths,
    profiles: RwLock<HashMap<String, ProfileDocument>>,
    initialized: AtomicBool,
}

impl FileDirectory {
    /// Create a directory client with automatic path detection.
    pub fn new() -> Result<Self> {
        Ok(Self::with_paths(DirectoryPaths::new()?))
    }

    /// Create a directory client with custom paths.
    pub fn with_paths(paths: DirectoryPaths) -> Self {
        Self {
            paths,
            profiles: RwLock::new(HashMap::new()),
            initialized: AtomicBool::new(false),
        }
    }

    /// The underlying paths.
    pub fn paths(&self) -> &DirectoryPaths {
        &self.paths
    }

    /// Initialize: create directories and load the profile map.
    pub async fn init(&self) -> Result<()> {
        self.paths.ensure_dirs().await?;

        let profiles = if fs::try_exists(&self.paths.profiles_path).await? {
            let bytes = fs::read(&self.paths.profiles_path).await?;
            serde_json::from_slice(&bytes)?
        } else {
            HashMap::new()
        };

        let count = profiles.len();
        *self.profiles.write().await = profiles;
        self.initialized.store(true, Ordering::SeqCst);
        info!(
            path = %self.paths.profiles_path.display(),
            profiles = count,
            "profile directory initialized"
        );
        Ok(())
    }

    /// Flush and detach. Further reads fail until `init` runs again.
    pub async fn dispose(&self) -> Result<()> {
        self.ensure_initialized()?;
        let profiles = self.profiles.read().await.clone();
        self.persist(&profiles).await?;
        self.initialized.store(false, Ordering::SeqCst);
        debug!("profile directory disposed");
        Ok(())
    }

    /// Insert or replace a principal's profile document and persist.
    pub async fn upsert_profile(
        &self,
        principal: &PrincipalId,
        document: ProfileDocument,
    ) -> Result<()> {
        self.ensure_initialized()?;
        let mut profiles = self.profiles.write().await;
        profiles.insert(principal.as_str().to_string(), document);
        let snapshot = profiles.clone();
        drop(profiles);
        self.persist(&snapshot).await
    }

    /// Remove a principal's profile document and persist. Returns
    /// whether one existed.
    pub async fn remove_profile(&self, principal: &PrincipalId) -> Result<bool> {
        self.ensure_initialized()?;
        let mut profiles = self.profiles.write().await;
        let existed = profiles.remove(principal.as_str()).is_some();
        let snapshot = profiles.clone();
        drop(profiles);
        if existed {
            self.persist(&snapshot).await?;
        }
        Ok(existed)
    }

    /// All principals with a stored profile.
    pub async fn list_principals(&self) -> Result<Vec<PrincipalId>> {
        self.ensure_initialized()?;
        let profiles = self.profiles.read().await;
        let mut principals: Vec<PrincipalId> =
            profiles.keys().map(|id| PrincipalId::new(id.clone())).collect();
        principals.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(principals)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DirectoryError::NotInitialized)
        }
    }

    async fn persist(&self, profiles: &HashMap<String, ProfileDocument>) -> Result<()> {
        let json = serde_json::to_vec_pretty(profiles)?;
        fs::write(&self.paths.profiles_path, json).await?;
        debug!(
            path = %self.paths.profiles_path.display(),
            profiles = profiles.len(),
            "profile directory persisted"
        );
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FileDirectory {
    async fn fetch_profile(
        &self,
        principal: &PrincipalId,
    ) -> std::result::Result<Option<ProfileDocument>, StoreError> {
        if !self.initialized.load(Ordering::SeqCst) {
            warn!(principal = %principal, "profile fetch before directory init");
            return Err(StoreError::Unavailable(
                DirectoryError::NotInitialized.to_string(),
            ));
        }
        Ok(self.profiles.read().await.get(principal.as_str()).cloned())
    }
}
