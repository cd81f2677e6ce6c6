//! OS-aware path detection for the Vicinus profile directory.
//!
//! - **Windows**: `%APPDATA%\Vicinus\`
//! - **macOS**: `~/Library/Application Support/Vicinus/`
//! - **Linux**: `~/.local/share/Vicinus/`

use std::path::PathBuf;

use tracing::debug;

use crate::error::{DirectoryError, Result};

/// Application name used for storage directories.
pub const APP_NAME: &str = "Vicinus";

/// File holding the principal → profile document map.
pub const PROFILES_FILE: &str = "profiles.json";

/// Vicinus directory paths container.
#[derive(Debug, Clone)]
pub struct DirectoryPaths {
    /// Root data directory (platform-specific).
    pub data_dir: PathBuf,
    /// Profile document map file.
    pub profiles_path: PathBuf,
}

impl DirectoryPaths {
    /// Create paths with automatic OS detection.
    pub fn new() -> Result<Self> {
        Ok(Self::from_root(vicinus_data_dir()?))
    }

    /// Create paths from a custom root directory.
    pub fn from_root(data_dir: PathBuf) -> Self {
        Self {
            profiles_path: data_dir.join(PROFILES_FILE),
            data_dir,
        }
    }

    /// Ensure the data directory exists.
    pub async fn ensure_dirs(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        debug!(data_dir = %self.data_dir.display(), "Vicinus directory initialized");
        Ok(())
    }
}

/// Get the Vicinus data directory based on the current OS.
pub fn vicinus_data_dir() -> Result<PathBuf> {
    // Check environment variable override first
    if let Ok(val) = std::env::var("VICINUS_DATA_DIR") {
        if !val.is_empty() {
            let path = PathBuf::from(val);
            debug!(path = %path.display(), "Using VICINUS_DATA_DIR override");
            return Ok(path);
        }
    }

    let base = dirs::data_dir().ok_or(DirectoryError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}
