//! Command-line interface.

pub mod completions;
pub mod load;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::types::KvPairSources;

/// kvage - Load key/value pairs from literals, files and env-files.
#[derive(Parser)]
#[command(
    name = "kvage",
    about = "Load key/value pairs from literals, files and env-files, decrypting age sources",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./kvage.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory relative source paths are resolved against
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the loaded key/value pairs
    Load {
        #[command(flatten)]
        sources: SourceArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Env)]
        format: Format,
    },

    /// Run a command with the loaded pairs as environment variables
    Run {
        #[command(flatten)]
        sources: SourceArgs,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Source flags shared by `load` and `run`.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Env-file to read; `.age` files are decrypted first
    #[arg(long = "from-env-file", value_name = "PATH")]
    pub env: Vec<String>,

    /// Literal pair; a `.age` key suffix marks an encrypted value
    #[arg(long = "from-literal", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub literals: Vec<String>,

    /// File whose content becomes the value; the key defaults to the basename
    #[arg(long = "from-file", value_name = "[KEY=]PATH")]
    pub files: Vec<String>,

    /// age identity file used for decryption
    #[arg(long = "age-identity", value_name = "PATH")]
    pub identities: Vec<String>,
}

impl From<SourceArgs> for KvPairSources {
    fn from(args: SourceArgs) -> Self {
        Self {
            env_sources: args.env,
            literal_sources: args.literals,
            file_sources: args.files,
            age_identity_sources: args.identities,
        }
    }
}

/// Output formats for `load`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Env,
    Json,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let config = cli.config.as_deref();
    let root = cli.root.as_deref();

    match cli.command {
        Command::Load { sources, format } => load::execute(config, root, sources, format),
        Command::Run { sources, command } => run::execute(config, root, sources, &command),
        Command::Completions { shell } => completions::execute(shell),
    }
}
