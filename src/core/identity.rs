//! Decryption identities.
//!
//! Identities come from two places: age identity files the caller asked for,
//! and the user's SSH private keys, which are probed opportunistically.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::SSH_KEY_PATHS;
use crate::core::store::Store;
use crate::error::{IdentityError, Result};

/// A private key usable for decryption.
///
/// Opaque to the loader; only the cipher looks inside.
pub struct Identity {
    inner: Box<dyn age::Identity>,
    source: PathBuf,
}

impl Identity {
    /// Wrap an age identity loaded from `source`.
    pub fn new(inner: Box<dyn age::Identity>, source: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            source: source.into(),
        }
    }

    /// Get a reference to the inner age identity (for decryption).
    pub fn as_age(&self) -> &dyn age::Identity {
        self.inner.as_ref()
    }

    /// Where this identity was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Parse every identity in an age identity file.
///
/// # Errors
///
/// Returns `IdentityError::ParseFailed` if the content is not a valid
/// identity file.
pub fn parse_identity_file(content: &[u8], path: &Path) -> Result<Vec<Identity>> {
    let parse_failed = |reason: String| IdentityError::ParseFailed {
        path: path.to_path_buf(),
        reason,
    };

    let identities = age::IdentityFile::from_buffer(content)
        .map_err(|e| parse_failed(e.to_string()))?
        .into_identities()
        .map_err(|e| parse_failed(e.to_string()))?;
    if identities.is_empty() {
        return Err(parse_failed("no identities found".to_string()).into());
    }

    Ok(identities
        .into_iter()
        .map(|inner| {
            let inner: Box<dyn age::Identity> = inner;
            Identity::new(inner, path)
        })
        .collect())
}

/// Parse an unencrypted SSH private key.
///
/// # Errors
///
/// Returns `IdentityError::ParseFailed` if the key is malformed, of an
/// unsupported type, or passphrase protected.
pub fn parse_ssh_identity(content: &[u8], path: &Path) -> Result<Identity> {
    let parse_failed = |reason: &str| IdentityError::ParseFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let key = age::ssh::Identity::from_buffer(content, Some(path.display().to_string()))
        .map_err(|e| parse_failed(&e.to_string()))?;

    match key {
        age::ssh::Identity::Unencrypted(_) => Ok(Identity::new(Box::new(key), path)),
        age::ssh::Identity::Encrypted(_) => Err(parse_failed("key is passphrase protected").into()),
        age::ssh::Identity::Unsupported(_) => Err(parse_failed("unsupported key type").into()),
    }
}

/// Try to load an SSH private key as an identity.
///
/// Returns `None` when the file cannot be read or parsed. These keys were not
/// requested by the caller, so their absence is never an error.
pub fn probe_ssh(path: &Path) -> Option<Identity> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ssh key not readable, skipping");
            return None;
        }
    };

    match parse_ssh_identity(&content, path) {
        Ok(identity) => Some(identity),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ssh key not usable, skipping");
            None
        }
    }
}

/// SSH private keys probed by default (`~/.ssh/id_rsa`, `~/.ssh/id_ed25519`).
pub fn default_ssh_keys() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => SSH_KEY_PATHS.iter().map(|p| home.join(p)).collect(),
        None => Vec::new(),
    }
}

/// Collect decryption identities.
///
/// Explicit identity files come first, in order, followed by whichever of
/// `ssh_keys` could be loaded.
///
/// # Errors
///
/// Returns `IdentityError` if any explicit identity file cannot be read or
/// parsed. SSH key failures are skipped.
pub fn resolve(explicit: &[String], store: &dyn Store, ssh_keys: &[PathBuf]) -> Result<Vec<Identity>> {
    let mut identities = Vec::new();

    for source in explicit {
        let path = store
            .absolute(Path::new(source))
            .map_err(|e| IdentityError::ReadFailed {
                path: PathBuf::from(source),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), "loading age identity file");

        let content = store.load(&path).map_err(|e| IdentityError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        identities.extend(parse_identity_file(&content, &path)?);
    }

    identities.extend(ssh_keys.iter().filter_map(|path| probe_ssh(path)));

    debug!(count = identities.len(), "identities resolved");
    Ok(identities)
}
