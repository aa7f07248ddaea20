//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::commands::Command;

/// Aggregator CLI tool for exploring contexts and evaluating expressions.
#[derive(Parser, Debug)]
#[command(name = "aggregator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and as whom to connect. Unset values fall back to the profile file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Profile file (defaults to config.json in the platform config directory)
    #[arg(long, global = true, env = "AGGREGATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service base URL, e.g. http://localhost:8080
    #[arg(long, global = true, env = "AGGREGATOR_URL")]
    pub url: Option<String>,

    /// Username to authenticate as
    #[arg(long, global = true, env = "AGGREGATOR_USER")]
    pub user: Option<String>,

    /// Password (never written to the profile)
    #[arg(long, global = true, env = "AGGREGATOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Session refresh interval in milliseconds
    #[arg(long, global = true, env = "AGGREGATOR_REFRESH_MS")]
    pub refresh_ms: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "AGGREGATOR_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
