//! Set variable command implementation.

use anyhow::{Context, Result};
use clap::Args;

use aggregator_core::{Aggregator, Payload, WriteMethod};

use crate::output;

use super::parse_json;

#[derive(Args, Debug)]
pub struct SetVariableArgs {
    /// Context path
    pub context: String,

    /// Variable name
    pub variable: String,

    /// New value as JSON
    pub value: String,

    /// PUT replaces the value, PATCH merges into it, POST appends records
    #[arg(long, default_value_t = WriteMethod::Put)]
    pub method: WriteMethod,

    /// Send the value verbatim instead of validating it as JSON
    #[arg(long)]
    pub raw: bool,
}

pub async fn run(args: SetVariableArgs, client: &impl Aggregator) -> Result<()> {
    let value = if args.raw {
        Payload::Raw(args.value)
    } else {
        Payload::Structured(parse_json(&args.value)?)
    };

    client
        .update_variable(&args.context, &args.variable, value, args.method)
        .await
        .context("Failed to update variable")?;

    output::success(&format!(
        "Updated {}:{} ({})",
        args.context, args.variable, args.method
    ));
    Ok(())
}
