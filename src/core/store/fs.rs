//! Filesystem-backed store.
//!
//! Relative paths are resolved against a root directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::Store;
use crate::error::{Result, StoreError};

/// Reads source content from the local filesystem.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the current directory.
    pub fn current() -> Self {
        Self::new(".")
    }
}

impl Store for Filesystem {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        trace!(path = %full.display(), "reading");

        fs::read(&full).map_err(|source| {
            StoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        let joined = self.root.join(path);
        if joined.is_absolute() {
            return Ok(joined);
        }
        let cwd = std::env::current_dir().map_err(|source| StoreError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(cwd.join(joined))
    }
}
