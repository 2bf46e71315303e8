//! Key name validation.
//!
//! The loader never decides on its own what a legal key looks like; it asks a
//! [`Validator`]. [`KeyRules`] implements the Kubernetes rules for environment
//! variable names and config map keys.

use crate::error::{Result, ValidationError};

/// Maximum length of a config map key.
const MAX_KEY_LEN: usize = 253;

/// Checks whether strings are acceptable key names.
pub trait Validator {
    /// Validate a key read from an env-file line.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the key is not a legal variable name.
    fn is_env_var_name(&self, key: &str) -> Result<()>;

    /// Validate a key produced by a literal or file source.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the key is not a legal config map key.
    fn is_config_map_key(&self, key: &str) -> Result<()>;
}

/// Kubernetes key naming rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRules;

fn is_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_')
}

fn invalid(key: &str, reason: impl Into<String>) -> crate::error::Error {
    ValidationError::InvalidKey {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

fn check_chars(key: &str) -> Result<()> {
    for (i, ch) in key.chars().enumerate() {
        if !is_key_char(ch) {
            return Err(invalid(
                key,
                format!(
                    "invalid character '{}' at position {}. Only alphanumerics, '-', '_' and '.' are allowed",
                    ch.escape_default(),
                    i + 1
                ),
            ));
        }
    }
    Ok(())
}

impl Validator for KeyRules {
    fn is_env_var_name(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(ValidationError::EmptyKey.into());
        }

        // Check first character - must not be a digit
        if let Some(first_char) = key.chars().next() {
            if first_char.is_ascii_digit() {
                return Err(invalid(key, "cannot start with a digit"));
            }
        }

        check_chars(key)
    }

    fn is_config_map_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(ValidationError::EmptyKey.into());
        }
        if key.len() > MAX_KEY_LEN {
            return Err(invalid(
                key,
                format!("must be no more than {} characters", MAX_KEY_LEN),
            ));
        }
        if key == "." || key == ".." {
            return Err(invalid(key, "must not be '.' or '..'"));
        }
        if key.starts_with("..") {
            return Err(invalid(key, "must not start with '..'"));
        }

        check_chars(key)
    }
}
