//! Variable, function and event listing.

use anyhow::{Context, Result};
use clap::Args;

use aggregator_core::Aggregator;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Context path, e.g. users.admin.devices.dev1
    pub context: String,

    /// Include table formats in the descriptors
    #[arg(long)]
    pub include_format: bool,

    /// Print full descriptors as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Variables,
    Functions,
    Events,
}

/// Name and group of one descriptor, for the plain listing.
struct Row {
    name: String,
    group: Option<String>,
}

pub async fn run(args: ListArgs, kind: Kind, client: &impl Aggregator) -> Result<()> {
    let context = args.context.as_str();

    let rows = match kind {
        Kind::Variables => {
            let items = client
                .get_variables(context, args.include_format)
                .await
                .context("Failed to list variables")?;
            if args.json {
                return items.iter().try_for_each(output::json_line);
            }
            items
                .into_iter()
                .map(|v| Row {
                    name: v.name,
                    group: v.group,
                })
                .collect::<Vec<_>>()
        }
        Kind::Functions => {
            let items = client
                .get_functions(context, args.include_format)
                .await
                .context("Failed to list functions")?;
            if args.json {
                return items.iter().try_for_each(output::json_line);
            }
            items
                .into_iter()
                .map(|f| Row {
                    name: f.name,
                    group: f.group,
                })
                .collect()
        }
        Kind::Events => {
            let items = client
                .get_events(context, args.include_format)
                .await
                .context("Failed to list events")?;
            if args.json {
                return items.iter().try_for_each(output::json_line);
            }
            items
                .into_iter()
                .map(|e| Row {
                    name: e.name,
                    group: e.group,
                })
                .collect()
        }
    };

    for row in &rows {
        output::descriptor(&row.name, row.group.as_deref());
    }

    Ok(())
}
