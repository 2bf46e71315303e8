//! kvage - Load key/value pairs, decrypting age sources.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kvage::cli::output;
use kvage::cli::{execute, Cli};
use kvage::core::constants::LOG_ENV;
use kvage::error::ErrorKind;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kvage=debug")
        } else {
            EnvFilter::new("kvage=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match e.kind() {
            ErrorKind::DecryptionFailed => Some("pass the matching key with --age-identity"),
            ErrorKind::IdentityLoadFailed => Some("check the --age-identity paths"),
            ErrorKind::InvalidFileSourceSpec => Some("file sources take the form [key=]path"),
            ErrorKind::InvalidLiteralSource => Some("literal sources take the form key=value"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
