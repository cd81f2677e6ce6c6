//! Tests for the profile directory.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use vicinus_access::{Action, Decision, Role};
use vicinus_session::{
    AuthChannel, PermissionsLoader, PermissionsState, PrincipalId, ProfileDocument, ProfileStore,
};

use crate::error::DirectoryError;
use crate::file::FileDirectory;
use crate::memory::MemoryDirectory;
use crate::paths::DirectoryPaths;

fn admin_doc() -> ProfileDocument {
    ProfileDocument {
        role: Some("admin".to_string()),
        permissions: None,
        account_id: None,
    }
}

fn resident_doc() -> ProfileDocument {
    ProfileDocument {
        role: Some("resident".to_string()),
        permissions: Some(vec!["fees.autopay".to_string()]),
        account_id: Some("acct-7".to_string()),
    }
}

mod paths_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_ensure_dirs_creates_data_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("Vicinus");
        let paths = DirectoryPaths::from_root(root.clone());
        assert_eq!(paths.profiles_path, root.join("profiles.json"));

        paths.ensure_dirs().await.unwrap();
        assert!(root.is_dir());

        // Idempotent on an existing directory.
        paths.ensure_dirs().await.unwrap();
    }
}

mod memory_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_upsert_and_fetch() {
        let directory = MemoryDirectory::new();
        directory.upsert("u1", resident_doc());
        assert_eq!(directory.len(), 1);

        let doc = directory
            .fetch_profile(&PrincipalId::new("u1"))
            .await
            .unwrap();
        assert_eq!(doc, Some(resident_doc()));

        let missing = directory
            .fetch_profile(&PrincipalId::new("nobody"))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_remove() {
        let directory = MemoryDirectory::new();
        directory.upsert("u1", admin_doc());
        assert!(directory.remove(&PrincipalId::new("u1")));
        assert!(!directory.remove(&PrincipalId::new("u1")));
        assert!(directory.is_empty());
    }
}

mod file_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_profile_crud() {
        let dir = tempdir().unwrap();
        let paths = DirectoryPaths::from_root(dir.path().to_path_buf());
        let directory = FileDirectory::with_paths(paths);
        directory.init().await.unwrap();

        let principal = PrincipalId::new("u1");
        directory
            .upsert_profile(&principal, resident_doc())
            .await
            .unwrap();

        let doc = directory.fetch_profile(&principal).await.unwrap();
        assert_eq!(doc, Some(resident_doc()));

        let principals = directory.list_principals().await.unwrap();
        assert_eq!(principals, vec![principal.clone()]);

        assert!(directory.remove_profile(&principal).await.unwrap());
        assert!(!directory.remove_profile(&principal).await.unwrap());
        assert_eq!(directory.fetch_profile(&principal).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_profiles_survive_reload() {
        let dir = tempdir().unwrap();
        let paths = DirectoryPaths::from_root(dir.path().to_path_buf());

        let directory = FileDirectory::with_paths(paths.clone());
        directory.init().await.unwrap();
        directory
            .upsert_profile(&PrincipalId::new("u1"), admin_doc())
            .await
            .unwrap();
        directory.dispose().await.unwrap();

        // Fresh client over the same root sees the same documents.
        let reloaded = FileDirectory::with_paths(paths);
        reloaded.init().await.unwrap();
        let doc = reloaded
            .fetch_profile(&PrincipalId::new("u1"))
            .await
            .unwrap();
        assert_eq!(doc, Some(admin_doc()));
    }

    #[tokio::test]
    async fn test_uninitialized_directory_refuses() {
        let dir = tempdir().unwrap();
        let directory =
            FileDirectory::with_paths(DirectoryPaths::from_root(dir.path().to_path_buf()));

        let err = directory
            .upsert_profile(&PrincipalId::new("u1"), admin_doc())
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotInitialized));

        // The ProfileStore surface reports unavailability; the loader
        // absorbs it into the viewer fallback.
        let err = directory
            .fetch_profile(&PrincipalId::new("u1"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not initialized"));
    }

    #[tokio::test]
    async fn test_dispose_then_reinit() {
        let dir = tempdir().unwrap();
        let directory =
            FileDirectory::with_paths(DirectoryPaths::from_root(dir.path().to_path_buf()));
        directory.init().await.unwrap();
        directory.dispose().await.unwrap();

        assert!(matches!(
            directory.list_principals().await.unwrap_err(),
            DirectoryError::NotInitialized
        ));

        directory.init().await.unwrap();
        assert!(directory.list_principals().await.unwrap().is_empty());
    }
}

mod loader_integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_loader_reads_file_directory() {
        let dir = tempdir().unwrap();
        let directory = Arc::new(FileDirectory::with_paths(DirectoryPaths::from_root(
            dir.path().to_path_buf(),
        )));
        directory.init().await.unwrap();
        directory
            .upsert_profile(&PrincipalId::new("resident-1"), resident_doc())
            .await
            .unwrap();

        let auth = AuthChannel::signed_in("resident-1");
        let loader = PermissionsLoader::spawn(Arc::new(auth), directory.clone());
        let mut handle = loader.handle();

        while !handle.state().is_settled() {
            assert!(handle.changed().await);
        }

        let record = handle.record().expect("record loaded");
        assert_eq!(record.role, Role::Resident);
        assert_eq!(handle.can_access("properties", Action::Show), Decision::Allowed);
        assert_eq!(handle.can_access("properties", Action::Edit), Decision::Denied);
        assert!(handle.has_permission("fees.autopay"));
        assert!(handle.belongs_to_account(Some("acct-7")));
    }

    #[tokio::test]
    async fn test_loader_over_uninitialized_directory_degrades() {
        let dir = tempdir().unwrap();
        let directory = Arc::new(FileDirectory::with_paths(DirectoryPaths::from_root(
            dir.path().to_path_buf(),
        )));
        // Deliberately no init: every fetch errors, the loader degrades
        // to least privilege instead of surfacing the failure.
        let auth = AuthChannel::signed_in("u1");
        let loader = PermissionsLoader::spawn(Arc::new(auth), directory.clone());
        let mut handle = loader.handle();

        while !handle.state().is_settled() {
            assert!(handle.changed().await);
        }
        assert_eq!(handle.state().role(), Some(Role::Viewer));
        assert_eq!(handle.can_access("accounts", Action::List), Decision::Denied);
        assert_eq!(handle.can_access("visitors", Action::Create), Decision::Allowed);
    }

    #[tokio::test]
    async fn test_sign_out_clears_memory_directory_session() {
        let directory = Arc::new(MemoryDirectory::new());
        directory.upsert("u1", admin_doc());

        let auth = AuthChannel::signed_in("u1");
        let loader = PermissionsLoader::spawn(Arc::new(auth.clone()), directory.clone());
        let mut handle = loader.handle();

        while handle.state().role() != Some(Role::Admin) {
            assert!(handle.changed().await);
        }

        auth.sign_out();
        while handle.state() != PermissionsState::Unauthenticated {
            assert!(handle.changed().await);
        }
        assert_eq!(handle.can_access("accounts", Action::List), Decision::Unknown);
    }
}
