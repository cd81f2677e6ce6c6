//! Profile document store seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vicinus_access::{PermissionRecord, Role};

use crate::auth::PrincipalId;

/// Raw stored shape of a principal's profile document.
///
/// Every field is optional: documents are written by the provisioning
/// side and may predate fields, carry empty strings, or be missing
/// entirely. Conversion into a [`PermissionRecord`] applies the
/// least-privilege defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl ProfileDocument {
    /// Resolve the document into a permission record.
    ///
    /// Missing or unrecognized roles become `viewer`; missing grant
    /// lists become empty; the account id passes through unchanged.
    pub fn into_record(self) -> PermissionRecord {
        let role = self
            .role
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(Role::parse_or_default)
            .unwrap_or_default();
        PermissionRecord {
            role,
            account_id: self.account_id,
            permissions: self.permissions.unwrap_or_default(),
        }
    }
}

/// Failure fetching a profile document.
///
/// The loader absorbs every variant into the viewer fallback; this type
/// exists so store implementations can say what went wrong in the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the read.
    #[error("profile store unavailable: {0}")]
    Unavailable(String),

    /// The stored document could not be decoded.
    #[error("malformed profile document: {0}")]
    Malformed(String),
}

/// Point lookup of profile documents by principal identifier.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile document for a principal. `Ok(None)` when no
    /// document exists.
    async fn fetch_profile(
        &self,
        principal: &PrincipalId,
    ) -> Result<Option<ProfileDocument>, StoreError>;
}
