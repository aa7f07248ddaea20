//! Subcommand implementations.

mod call;
mod configure;
mod evaluate;
mod get_variable;
mod list;
mod login;
mod set_variable;

use anyhow::{Context, Result};
use clap::Subcommand;

use aggregator_http::HttpAggregator;

use crate::cli::ConnectionArgs;
use crate::profile;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate and report the session
    Login(login::LoginArgs),

    /// Store connection settings in the profile file
    Configure(configure::ConfigureArgs),

    /// Evaluate an expression
    Evaluate(evaluate::EvaluateArgs),

    /// List the variables of a context
    Variables(list::ListArgs),

    /// List the functions of a context
    Functions(list::ListArgs),

    /// List the events of a context
    Events(list::ListArgs),

    /// Read a variable value
    GetVariable(get_variable::GetVariableArgs),

    /// Write a variable value
    SetVariable(set_variable::SetVariableArgs),

    /// Invoke a function
    Call(call::CallArgs),
}

pub async fn handle(command: Command, connection: ConnectionArgs) -> Result<()> {
    match command {
        Command::Configure(args) => configure::run(args, &connection),
        Command::Login(args) => login::run(args, &connection).await,
        Command::Evaluate(args) => evaluate::run(args, &client(&connection)?).await,
        Command::Variables(args) => {
            list::run(args, list::Kind::Variables, &client(&connection)?).await
        }
        Command::Functions(args) => {
            list::run(args, list::Kind::Functions, &client(&connection)?).await
        }
        Command::Events(args) => list::run(args, list::Kind::Events, &client(&connection)?).await,
        Command::GetVariable(args) => get_variable::run(args, &client(&connection)?).await,
        Command::SetVariable(args) => set_variable::run(args, &client(&connection)?).await,
        Command::Call(args) => call::run(args, &client(&connection)?).await,
    }
}

/// Build a client from flags, environment and profile. Authentication is
/// deferred to the first call.
fn client(connection: &ConnectionArgs) -> Result<HttpAggregator> {
    let config = profile::client_config(connection)?;
    HttpAggregator::new(config).context("Failed to build HTTP client")
}

/// Parse a command-line value as JSON.
fn parse_json(text: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).with_context(|| format!("Not valid JSON: {text}"))
}
