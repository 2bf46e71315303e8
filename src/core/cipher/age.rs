//! Age decryption backend.
//!
//! Accepts both ASCII-armored and binary age ciphertext.

use std::io::Read;

use tracing::trace;

use super::Cipher;
use crate::core::identity::Identity;
use crate::error::{CipherError, Result};

/// Age-based decryption backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age;

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn decrypt(&self, ciphertext: &[u8], identities: &[Identity], origin: &str) -> Result<Vec<u8>> {
        trace!(
            identities = identities.len(),
            ciphertext_len = ciphertext.len(),
            "decrypting"
        );

        let failed = |reason: String| CipherError::DecryptionFailed {
            origin: origin.to_string(),
            reason,
        };

        let reader = ::age::armor::ArmoredReader::new(ciphertext);
        let decryptor = ::age::Decryptor::new(reader).map_err(|e| failed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        let mut reader = decryptor
            .decrypt(identities.iter().map(Identity::as_age))
            .map_err(|e| failed(format!("{}", e)))?;

        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| failed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        Ok(decrypted)
    }
}
