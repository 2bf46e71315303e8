//! kvage - Load key/value pairs from heterogeneous sources, decrypting
//! age-encrypted ones on the way.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── load          # Print loaded pairs
//! │   ├── run           # Run with pairs injected as env vars
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── loader        # Orchestrates the source lists
//!     ├── source        # key=value and [key=]path parsers
//!     ├── env           # env-file line grammar
//!     ├── identity      # age identity files and SSH keys
//!     ├── cipher/       # Decryption dispatch
//!     │   ├── age       # whole-value age decryption
//!     │   └── inline    # armored fragments inside YAML text
//!     ├── store/        # Content retrieval
//!     ├── validation    # Key name rules
//!     └── config        # kvage.toml
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kvage::core::loader::Loader;
//! use kvage::core::types::KvPairSources;
//!
//! let sources = KvPairSources {
//!     env_sources: vec!["app.env".into()],
//!     literal_sources: vec!["MODE=prod".into()],
//!     file_sources: vec!["tls.crt=certs/tls.crt.age".into()],
//!     age_identity_sources: vec!["keys/identity.txt".into()],
//! };
//! let pairs = Loader::from_root(".").load(&sources)?;
//! for pair in pairs {
//!     println!("{}", pair.key);
//! }
//! # Ok::<(), kvage::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::loader::Loader;
pub use crate::core::types::{KvPairSources, Pair};
pub use crate::error::{Error, ErrorKind, Result};
