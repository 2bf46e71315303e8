//! Core library components.
//!
//! Source parsing, identity resolution and decryption, composed by
//! [`loader::Loader`].

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
pub mod identity;
pub mod loader;
pub mod source;
pub mod store;
pub mod types;
pub mod validation;
