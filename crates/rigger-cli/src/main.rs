//! Rigger CLI binary.
//!
//! Entry point for the `rigger` command-line tool. It initializes logging via
//! `tracing` (written to stderr so rendered configurations stay clean on
//! stdout), parses arguments with `clap`, and dispatches to a command handler.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?args.command, "dispatching");
    commands::dispatch(args)
}
