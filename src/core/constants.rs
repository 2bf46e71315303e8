//! Constants used throughout kvage.
//!
//! Centralizes magic strings and configuration values.

/// Suffix marking a source as age-encrypted.
pub const AGE_SUFFIX: &str = ".age";

/// Key suffixes that select inline YAML decryption.
pub const YAML_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// First line of an ASCII-armored age file.
pub const ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Last line of an ASCII-armored age file.
pub const ARMOR_FOOTER: &str = "-----END AGE ENCRYPTED FILE-----";

/// UTF-8 byte-order mark, stripped from the first line of env-files only.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// SSH private keys probed for identities, relative to HOME.
pub const SSH_KEY_PATHS: &[&str] = &[".ssh/id_rsa", ".ssh/id_ed25519"];

/// Project configuration file name.
pub const CONFIG_FILE: &str = "kvage.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "KVAGE_LOG";
