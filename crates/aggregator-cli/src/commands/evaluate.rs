//! Evaluate command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use aggregator_core::{Aggregator, EvaluateRequest};

use crate::output;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Expression to evaluate
    pub expression: String,

    /// Encoded default table the expression runs against
    #[arg(long)]
    pub table: Option<String>,

    /// Default context for relative references
    #[arg(long)]
    pub context: Option<String>,
}

pub async fn run(args: EvaluateArgs, client: &impl Aggregator) -> Result<()> {
    let mut request = EvaluateRequest::new(args.expression);
    if let Some(table) = args.table {
        request = request.with_table(table);
    }
    if let Some(context) = args.context {
        request = request.with_context(context);
    }

    let result: Value = client
        .evaluate(&request)
        .await
        .context("Failed to evaluate expression")?;

    output::value(&result)
}
