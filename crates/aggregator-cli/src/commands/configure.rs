//! Configure command implementation.

use anyhow::{Result, bail};
use clap::Args;

use aggregator_core::ServerUrl;

use crate::cli::ConnectionArgs;
use crate::{output, profile};

#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Print the stored profile instead of changing it
    #[arg(long)]
    pub show: bool,
}

pub fn run(args: ConfigureArgs, connection: &ConnectionArgs) -> Result<()> {
    let path = profile::resolve_path(connection)?;
    let stored = profile::load(&path)?.unwrap_or_default();

    if args.show {
        return output::json_pretty(&stored);
    }

    let updated = stored.clone().merged_with(connection);
    if let Some(url) = &updated.url {
        ServerUrl::new(url)?;
    }
    if updated == stored {
        bail!("Nothing to store. Pass --url, --user, --refresh-ms or --timeout-secs.");
    }

    profile::save(&path, &updated)?;

    output::success("Profile saved");
    output::field("Path", &path.display().to_string());
    Ok(())
}
