//! aggregator - CLI tool for an aggregator rule evaluation service.
//!
//! Evaluates expressions and browses the variables, functions and events of
//! contexts on a running service. Results go to stdout, logs and errors to
//! stderr.

mod cli;
mod commands;
mod output;
mod profile;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match commands::handle(cli.command, cli.connection).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Level used when `RUST_LOG` is unset.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,aggregator_http=debug",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}
