//! Content retrieval.
//!
//! The loader reads every source and identity file through a [`Store`], so
//! callers decide where paths point and how bytes are fetched.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `http.rs`, `archive.rs`)
//! 3. Re-export from this module

use std::path::{Path, PathBuf};

use crate::error::Result;

mod fs;

pub use fs::Filesystem;

/// Source content retrieval trait.
pub trait Store {
    /// Read the raw bytes at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the content cannot be retrieved.
    fn load(&self, path: &Path) -> Result<Vec<u8>>;

    /// Resolve `path` to the absolute location this store would read.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Resolve` if the path cannot be made absolute.
    fn absolute(&self, path: &Path) -> Result<PathBuf>;
}
