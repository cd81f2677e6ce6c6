//! Vicinus Directory - profile document store for the Vicinus back
//! office.
//!
//! Concrete [`ProfileStore`](vicinus_session::ProfileStore)
//! implementations the permissions loader can be constructed with:
//!
//! - [`MemoryDirectory`]: in-memory, for tests and embedders that
//!   provision profiles at startup
//! - [`FileDirectory`]: one JSON document map under an OS-aware data
//!   directory, with an explicit `init`/`dispose` lifecycle
//!
//! Storage locations:
//!
//! - **Windows**: `%APPDATA%\Vicinus\profiles.json`
//! - **macOS**: `~/Library/Application Support/Vicinus/profiles.json`
//! - **Linux**: `~/.local/share/Vicinus/profiles.json`
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vicinus_directory::FileDirectory;
//! use vicinus_session::{AuthChannel, PermissionsLoader};
//!
//! #[tokio::main]
//! async fn main() -> vicinus_directory::Result<()> {
//!     let directory = Arc::new(FileDirectory::new()?);
//!     directory.init().await?;
//!
//!     let auth = AuthChannel::new();
//!     let loader = PermissionsLoader::spawn(Arc::new(auth), directory.clone());
//!     let _permissions = loader.handle();
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod paths;

mod file;
mod memory;

#[cfg(test)]
mod tests;

// Re-export main types at crate root
pub use error::{DirectoryError, Result};
pub use file::FileDirectory;
pub use memory::MemoryDirectory;
pub use paths::{DirectoryPaths, vicinus_data_dir};
