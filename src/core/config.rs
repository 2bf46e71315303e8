//! Configuration file management.
//!
//! Handles reading the optional `kvage.toml` project file, which declares
//! sources the same way the command-line flags do.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::KvPairSources;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `kvage.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Declared sources, loaded before any given on the command line
    #[serde(default)]
    pub sources: KvPairSources,
    /// File this configuration was read from
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Path to the default configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `kvage.toml` in the current
    /// directory is read if present and an empty configuration is returned
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    debug!("no config file, using command-line sources only");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&contents)?;
        config.path = Some(path);

        debug!(
            env = config.sources.env_sources.len(),
            literals = config.sources.literal_sources.len(),
            files = config.sources.file_sources.len(),
            identities = config.sources.age_identity_sources.len(),
            "config loaded"
        );

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Directory containing the configuration file, if one was read.
    pub fn dir(&self) -> Option<&Path> {
        self.path.as_deref().map(|p| match p.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        })
    }
}
