//! Get variable command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use aggregator_core::Aggregator;

use crate::output;

#[derive(Args, Debug)]
pub struct GetVariableArgs {
    /// Context path
    pub context: String,

    /// Variable name
    pub variable: String,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Number of records to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

pub async fn run(args: GetVariableArgs, client: &impl Aggregator) -> Result<()> {
    let value: Value = client
        .get_variable(&args.context, &args.variable, args.limit, args.offset)
        .await
        .context("Failed to get variable")?;

    output::value(&value)
}
