//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use aggregator_http::HttpAggregator;

use crate::cli::ConnectionArgs;
use crate::{output, profile};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Save URL and user to the profile after a successful login
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: LoginArgs, connection: &ConnectionArgs) -> Result<()> {
    let config = profile::client_config(connection)?;
    let url = config.url().clone();

    eprintln!("{}", "Logging in...".dimmed());

    let client = HttpAggregator::connect(config)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("URL", url.base());
    output::field("User", client.username());
    if let Some(at) = client.last_authenticated().await {
        output::field("Authenticated at", &at.to_rfc3339());
    }

    if args.save {
        let path = profile::resolve_path(connection)?;
        let stored = profile::load(&path)?.unwrap_or_default();
        profile::save(&path, &stored.merged_with(connection))?;
        output::field("Profile", &path.display().to_string());
    }

    Ok(())
}
