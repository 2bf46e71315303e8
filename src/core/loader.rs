//! Key/value loading.
//!
//! [`Loader::load`] resolves identities once, then reads env-files, literals
//! and files in that order. The first error aborts the whole load; it is
//! wrapped with the category and inputs that were being processed.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher::{self, Age, Cipher, DecryptMode};
use crate::core::constants::AGE_SUFFIX;
use crate::core::env::{self, Environment, ProcessEnv};
use crate::core::identity::{self, Identity};
use crate::core::source;
use crate::core::store::{Filesystem, Store};
use crate::core::types::{KvPairSources, Pair};
use crate::core::validation::{KeyRules, Validator};
use crate::error::{Result, SourceError};

/// Reads key/value pairs from sources, decrypting `.age` sources.
pub struct Loader {
    store: Box<dyn Store>,
    root: Box<dyn Store>,
    validator: Box<dyn Validator>,
    env: Box<dyn Environment>,
    cipher: Box<dyn Cipher>,
    ssh_keys: Vec<PathBuf>,
}

impl Loader {
    /// Create a loader.
    ///
    /// `store` reads sources; `root` reads identity files. Bare env-file keys
    /// are looked up in the process environment and the user's default SSH
    /// keys are probed for identities.
    pub fn new(
        store: impl Store + 'static,
        root: impl Store + 'static,
        validator: impl Validator + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            root: Box::new(root),
            validator: Box::new(validator),
            env: Box::new(ProcessEnv),
            cipher: Box::new(Age),
            ssh_keys: identity::default_ssh_keys(),
        }
    }

    /// Loader reading everything from the filesystem under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let fs = Filesystem::new(root);
        Self::new(fs.clone(), fs, KeyRules)
    }

    /// Replace the environment used for bare env-file keys.
    pub fn with_environment(mut self, env: impl Environment + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Replace the decryption backend.
    pub fn with_cipher(mut self, cipher: impl Cipher + 'static) -> Self {
        self.cipher = Box::new(cipher);
        self
    }

    /// Replace the SSH keys probed for identities.
    pub fn with_ssh_keys(mut self, ssh_keys: Vec<PathBuf>) -> Self {
        self.ssh_keys = ssh_keys;
        self
    }

    /// Load all pairs: env-file pairs, then literals, then files.
    ///
    /// Duplicate keys are kept.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered, wrapped with the failing category.
    pub fn load(&self, sources: &KvPairSources) -> Result<Vec<Pair>> {
        let ids = identity::resolve(
            &sources.age_identity_sources,
            self.root.as_ref(),
            &self.ssh_keys,
        )
        .map_err(|e| {
            e.context(format!(
                "age identity source files: {:?}",
                sources.age_identity_sources
            ))
        })?;

        let mut all = self
            .from_env_files(&sources.env_sources, &ids)
            .map_err(|e| e.context(format!("env source files: {:?}", sources.env_sources)))?;

        all.extend(
            self.from_literals(&sources.literal_sources, &ids)
                .map_err(|e| e.context(format!("literal sources: {:?}", sources.literal_sources)))?,
        );

        all.extend(
            self.from_files(&sources.file_sources, &ids)
                .map_err(|e| e.context(format!("file sources: {:?}", sources.file_sources)))?,
        );

        debug!(pairs = all.len(), "sources loaded");
        Ok(all)
    }

    fn from_env_files(&self, paths: &[String], ids: &[Identity]) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        for path in paths {
            debug!(path = %path, "reading env file");
            let mut content = self.store.load(Path::new(path))?;
            if path.ends_with(AGE_SUFFIX) {
                content = cipher::decrypt(
                    self.cipher.as_ref(),
                    &content,
                    ids,
                    DecryptMode::WholeValue,
                    path,
                )?;
            }
            pairs.extend(env::parse_lines(
                &content,
                self.validator.as_ref(),
                self.env.as_ref(),
            )?);
        }
        Ok(pairs)
    }

    fn from_literals(&self, sources: &[String], ids: &[Identity]) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        for s in sources {
            let (key, value) = source::parse_literal(s)?;
            let pair = match key.strip_suffix(AGE_SUFFIX) {
                Some(key) => {
                    let mode = cipher::decide_mode(key, None);
                    let plaintext =
                        cipher::decrypt(self.cipher.as_ref(), value.as_bytes(), ids, mode, key)?;
                    Pair::new(key, utf8(plaintext, key)?)
                }
                None => Pair::new(key, value),
            };
            self.validator.is_config_map_key(&pair.key)?;
            debug!(key = %pair.key, "literal source");
            pairs.push(pair);
        }
        Ok(pairs)
    }

    fn from_files(&self, sources: &[String], ids: &[Identity]) -> Result<Vec<Pair>> {
        let mut pairs = Vec::new();
        for s in sources {
            let (key, path) = source::parse_file_spec(s)?;
            let content = self.store.load(Path::new(&path))?;

            let (key, content) = if path.ends_with(AGE_SUFFIX) {
                let key = key.strip_suffix(AGE_SUFFIX).unwrap_or(&key).to_string();
                let mode = cipher::decide_mode(&key, Some(&content));
                let plaintext = cipher::decrypt(self.cipher.as_ref(), &content, ids, mode, &path)?;
                (key, plaintext)
            } else {
                (key, content)
            };

            self.validator.is_config_map_key(&key)?;
            debug!(key = %key, path = %path, "file source");
            pairs.push(Pair::new(key, utf8(content, &path)?));
        }
        Ok(pairs)
    }
}

fn utf8(bytes: Vec<u8>, origin: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8(origin.to_string()).into())
}
