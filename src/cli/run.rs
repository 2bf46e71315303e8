//! Run command.
//!
//! Executes a command with the loaded pairs injected as environment variables.

use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::load::load_pairs;
use crate::cli::SourceArgs;
use crate::core::types::Pair;
use crate::error::{Error, Result};

/// Run a command with loaded pairs injected as environment variables.
pub fn execute(config: Option<&Path>, root: Option<&Path>, args: SourceArgs, command: &[String]) -> Result<()> {
    let pairs = load_pairs(config, root, args)?;
    let exit_code = run_with_pairs(pairs, command)?;
    std::process::exit(exit_code);
}

/// Run a command with pairs as environment variables, returning its exit code.
fn run_with_pairs(pairs: Vec<Pair>, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Later pairs win for duplicate keys, as with repeated assignments.
    // Use Zeroizing to ensure values are wiped from memory after use
    for pair in pairs {
        let value = Zeroizing::new(pair.value);
        cmd.env(&pair.key, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
