//! Error types for kvage.
//!
//! Errors are grouped by the layer that produces them. [`Error::kind`]
//! collapses any of them to the coarse [`ErrorKind`] callers usually match on.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An error wrapped with the source category and inputs being processed.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Malformed source specifications and content.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid literal source {0}, expected key=value")]
    InvalidLiteral(String),

    #[error("key name for file path {0} missing")]
    MissingKeyName(String),

    #[error("file path for key name {0} missing")]
    MissingFilePath(String),

    #[error("key names or file paths cannot contain '='")]
    AmbiguousSeparators(String),

    #[error("line {line} has invalid utf8 bytes: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("content of {0} is not valid utf8")]
    NotUtf8(String),
}

/// Key names rejected by a [`crate::core::validation::Validator`].
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key name cannot be empty")]
    EmptyKey,

    #[error("invalid key name '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("failed to decrypt {origin}: {reason}")]
    DecryptionFailed { origin: String, reason: String },
}

/// Failures loading explicitly requested age identities.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("failed to read identity file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse identity file {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },
}

/// Content retrieval failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidLiteralSource,
    InvalidFileSourceSpec,
    InvalidKeyName,
    InvalidEncoding,
    IdentityLoadFailed,
    DecryptionFailed,
    SourceReadFailed,
    Config,
    Other,
}

impl Error {
    /// Wrap this error with a description of what was being processed.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Classify this error, looking through any [`Error::Context`] layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Context { source, .. } => source.kind(),
            Error::Source(SourceError::InvalidLiteral(_)) => ErrorKind::InvalidLiteralSource,
            Error::Source(
                SourceError::MissingKeyName(_)
                | SourceError::MissingFilePath(_)
                | SourceError::AmbiguousSeparators(_),
            ) => ErrorKind::InvalidFileSourceSpec,
            Error::Source(SourceError::InvalidLine { .. } | SourceError::NotUtf8(_)) => {
                ErrorKind::InvalidEncoding
            }
            Error::Validation(_) => ErrorKind::InvalidKeyName,
            Error::Cipher(_) => ErrorKind::DecryptionFailed,
            Error::Identity(_) => ErrorKind::IdentityLoadFailed,
            Error::Store(_) => ErrorKind::SourceReadFailed,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) | Error::Other(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
