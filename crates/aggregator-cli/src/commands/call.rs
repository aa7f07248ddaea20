//! Call command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use aggregator_core::{Aggregator, Payload};

use crate::output;

use super::parse_json;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Context path
    pub context: String,

    /// Function name
    pub function: String,

    /// Input table as JSON (defaults to an empty table)
    #[arg(long)]
    pub input: Option<String>,
}

pub async fn run(args: CallArgs, client: &impl Aggregator) -> Result<()> {
    let input = args
        .input
        .as_deref()
        .map(parse_json)
        .transpose()?
        .map(Payload::Structured);

    let result: Value = client
        .do_function(&args.context, &args.function, input)
        .await
        .context("Failed to call function")?;

    output::value(&result)
}
