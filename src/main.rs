//! Binary entry point for scour-rs.

// The CLI entry point is the one place that talks to stdout.
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scour_rs::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli::execute(&cli)?;
    println!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug
/// logging for this crate. Diagnostics go to stderr so report text on
/// stdout stays pipeable.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "scour_rs=debug"
    } else {
        "scour_rs=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
