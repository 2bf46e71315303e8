//! Domain types shared by the parsers and the loader.

use serde::{Deserialize, Serialize};

/// A key/value pair produced by a source.
///
/// `value` is the raw (decrypted) text, never re-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A pair with an empty key marks a blank or comment env-file line.
    pub fn is_skip(&self) -> bool {
        self.key.is_empty()
    }
}

/// The ordered source lists handed to [`crate::core::loader::Loader::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KvPairSources {
    /// Paths to env-files.
    #[serde(default, rename = "env")]
    pub env_sources: Vec<String>,
    /// `key=value` strings.
    #[serde(default, rename = "literals")]
    pub literal_sources: Vec<String>,
    /// `[key=]path` strings.
    #[serde(default, rename = "files")]
    pub file_sources: Vec<String>,
    /// Paths to age identity files.
    #[serde(default, rename = "identities")]
    pub age_identity_sources: Vec<String>,
}

impl KvPairSources {
    /// Append every list of `other` to the matching list of `self`.
    pub fn merge(&mut self, other: KvPairSources) {
        self.env_sources.extend(other.env_sources);
        self.literal_sources.extend(other.literal_sources);
        self.file_sources.extend(other.file_sources);
        self.age_identity_sources.extend(other.age_identity_sources);
    }
}
