//! Load command.
//!
//! Prints the loaded pairs as `KEY=value` lines or JSON.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Format, SourceArgs};
use crate::core::config::Config;
use crate::core::loader::Loader;
use crate::core::types::{KvPairSources, Pair};
use crate::error::{Error, Result};

/// Load pairs from the config file sources followed by the command-line ones.
///
/// Relative paths resolve against `root`, else the config file's directory,
/// else the current directory.
pub fn load_pairs(config: Option<&Path>, root: Option<&Path>, args: SourceArgs) -> Result<Vec<Pair>> {
    let config = Config::load(config)?;
    let root: PathBuf = root
        .or_else(|| config.dir())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut sources = config.sources;
    sources.merge(KvPairSources::from(args));
    debug!(root = %root.display(), "loading sources");

    Loader::from_root(root).load(&sources)
}

/// Print loaded pairs to stdout.
pub fn execute(config: Option<&Path>, root: Option<&Path>, args: SourceArgs, format: Format) -> Result<()> {
    let pairs = load_pairs(config, root, args)?;
    print!("{}", render(&pairs, format)?);
    Ok(())
}

/// Render pairs in the requested format.
pub fn render(pairs: &[Pair], format: Format) -> Result<String> {
    match format {
        Format::Env => Ok(pairs.iter().map(env_line).collect()),
        Format::Json => serde_json::to_string_pretty(pairs)
            .map(|json| json + "\n")
            .map_err(|e| Error::Other(format!("failed to serialize pairs: {}", e))),
    }
}

fn env_line(pair: &Pair) -> String {
    // Quote and escape values that contain whitespace or .env-special chars.
    if needs_quotes(&pair.value) {
        format!("{}=\"{}\"\n", pair.key, escape_env_value(&pair.value))
    } else {
        format!("{}={}\n", pair.key, pair.value)
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(char::is_whitespace)
        || value.contains(['#', '=', '"', '\'', '\\'].as_slice())
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
