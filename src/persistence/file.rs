use std::{fs, path::PathBuf};

use tracing::debug;

use crate::core::{Result, SettingsError};

use super::{StorePaths, medium::StorageMedium};

/// File-backed storage medium: one file per key under a root directory.
///
/// Values are written through a temp file and renamed into place so a crash
/// mid-write never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct FileMedium {
    root: PathBuf,
}

impl FileMedium {
    /// Creates a medium rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locates the medium in the standard settings directory.
    ///
    /// Returns `None` when no settings directory can be determined for the
    /// current execution context; the store then runs in memory only.
    pub fn discover() -> Option<Self> {
        match StorePaths::config_dir() {
            Ok(dir) => Some(Self::new(dir)),
            Err(e) => {
                debug!("no durable settings storage available: {e}");
                None
            }
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| SettingsError::PersistenceError {
            key: key.to_string(),
            details: format!("failed to create {}: {e}", self.root.display()),
        })?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, value).map_err(|e| SettingsError::PersistenceError {
            key: key.to_string(),
            details: e.to_string(),
        })?;

        fs::rename(&temp_path, &path).map_err(|e| SettingsError::PersistenceError {
            key: key.to_string(),
            details: e.to_string(),
        })
    }
}
