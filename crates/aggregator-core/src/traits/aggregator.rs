//! Aggregator operation trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::model::{EvaluateRequest, Event, Function, Variable};
use crate::types::{ServerUrl, WriteMethod};
use crate::{Payload, Result};

/// The operations an aggregator service exposes.
///
/// Every call authenticates on demand, so implementations hold their own
/// session state and callers only see results.
#[async_trait]
pub trait Aggregator: Send + Sync {
    /// Returns the base URL of the service.
    fn url(&self) -> &ServerUrl;

    /// Evaluate an expression and return the unwrapped `result` value.
    async fn evaluate<T>(&self, request: &EvaluateRequest) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// List the variables of a context.
    async fn get_variables(&self, context: &str, include_format: bool) -> Result<Vec<Variable>>;

    /// List the functions of a context.
    async fn get_functions(&self, context: &str, include_format: bool) -> Result<Vec<Function>>;

    /// List the events of a context.
    async fn get_events(&self, context: &str, include_format: bool) -> Result<Vec<Event>>;

    /// Read a variable value, paging through its records with `limit`/`offset`.
    async fn get_variable<T>(
        &self,
        context: &str,
        variable: &str,
        limit: u32,
        offset: u32,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Write a variable value.
    async fn update_variable(
        &self,
        context: &str,
        variable: &str,
        value: Payload,
        method: WriteMethod,
    ) -> Result<()>;

    /// Invoke a function. A `None` input is sent as an empty table.
    async fn do_function<T>(
        &self,
        context: &str,
        function: &str,
        input: Option<Payload>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send;
}
