//! Decryption of age-encrypted sources.
//!
//! A blob is decrypted in one of two ways, picked by [`decide_mode`]:
//!
//! - **Whole value**: the entire blob is one age ciphertext (armored or binary).
//! - **Inline YAML**: the blob is plaintext YAML-shaped text in which some
//!   scalar values are armored age fragments; only those are replaced.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use tracing::debug;

use crate::core::constants::{ARMOR_HEADER, YAML_SUFFIXES};
use crate::core::identity::Identity;
use crate::error::Result;

mod age;
mod inline;

pub use age::Age;

/// Decryption backend trait.
///
/// `origin` names the source being decrypted and ends up in error messages.
pub trait Cipher {
    /// Decrypt a complete ciphertext with the first identity that matches.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if no identity matches or the
    /// ciphertext is malformed.
    fn decrypt(&self, ciphertext: &[u8], identities: &[Identity], origin: &str) -> Result<Vec<u8>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// How an encrypted blob is decrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptMode {
    WholeValue,
    InlineYaml,
}

/// Pick the decryption mode for a key whose `.age` suffix was already removed.
///
/// Keys ending in `.yaml`/`.yml` use inline mode, unless `content` is given
/// and starts with the armor header. Literal sources pass `None` and are
/// decided by name alone.
pub fn decide_mode(key: &str, content: Option<&[u8]>) -> DecryptMode {
    let yaml = YAML_SUFFIXES.iter().any(|suffix| key.ends_with(suffix));
    let armored = content.is_some_and(|c| c.starts_with(ARMOR_HEADER.as_bytes()));

    if yaml && !armored {
        DecryptMode::InlineYaml
    } else {
        DecryptMode::WholeValue
    }
}

/// Decrypt `content` in the given mode.
///
/// # Errors
///
/// Returns `CipherError::DecryptionFailed` naming `origin` on any failure.
pub fn decrypt(
    cipher: &dyn Cipher,
    content: &[u8],
    identities: &[Identity],
    mode: DecryptMode,
    origin: &str,
) -> Result<Vec<u8>> {
    debug!(origin, ?mode, cipher = cipher.name(), "decrypting source");
    match mode {
        DecryptMode::WholeValue => cipher.decrypt(content, identities, origin),
        DecryptMode::InlineYaml => inline::decrypt(cipher, content, identities, origin),
    }
}
