//! HTTP-backed aggregator client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use aggregator_core::{
    Aggregator, Error, EvaluateRequest, Event, Function, Payload, Result, ResultEnvelope,
    ServerUrl, Variable, WriteMethod,
};

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::decode::{decode, expect_success};
use crate::dispatch::Dispatcher;
use crate::endpoints::{self, EntityKind, EVALUATE};
use crate::transport::Transport;

/// Client for one aggregator service and one user.
///
/// Cheap to clone; clones share the session. The session token is obtained
/// on the first call and renewed once the configured refresh interval has
/// passed.
///
/// # Example
///
/// ```no_run
/// use aggregator_core::{Aggregator, Credentials, ServerUrl, Variable};
/// use aggregator_http::{ClientConfig, HttpAggregator};
///
/// # async fn example() -> aggregator_core::Result<()> {
/// let url = ServerUrl::new("http://localhost:8080")?;
/// let client = HttpAggregator::new(ClientConfig::new(url, Credentials::new("admin", "admin")))?;
///
/// let variables: Vec<Variable> = client.get_variables("users.admin", true).await?;
/// for variable in variables {
///     println!("{}", variable.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpAggregator {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    url: ServerUrl,
    username: String,
    dispatcher: Dispatcher,
}

impl HttpAggregator {
    /// Build a client without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        let auth = Authenticator::new(
            config.credentials().clone(),
            config.refresh_interval_millis(),
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                url: config.url().clone(),
                username: config.credentials().username().to_string(),
                dispatcher: Dispatcher::new(transport, auth),
            }),
        })
    }

    /// Build a client and log in immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] if the service rejects the credentials or
    /// cannot be reached.
    #[instrument(skip(config), fields(url = %config.url(), username = %config.credentials().username()))]
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        info!("Connecting to aggregator");
        let client = Self::new(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Log in or renew the session if the held token is missing or stale.
    pub async fn authenticate(&self) -> Result<()> {
        let dispatcher = &self.inner.dispatcher;
        dispatcher
            .authenticator()
            .ensure_authenticated(dispatcher.transport())
            .await
            .map(drop)
    }

    /// Whether a session token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner
            .dispatcher
            .authenticator()
            .current_token()
            .await
            .is_some()
    }

    /// When the held token was obtained or last renewed.
    pub async fn last_authenticated(&self) -> Option<DateTime<Utc>> {
        self.inner.dispatcher.authenticator().last_authenticated().await
    }

    /// Drop the session; the next call performs a full login.
    ///
    /// Use after a renew exchange was rejected, e.g. because the service
    /// expired the token on its side.
    pub async fn reset_session(&self) {
        debug!(username = %self.inner.username, "Resetting session");
        self.inner.dispatcher.authenticator().reset().await;
    }

    /// User this client authenticates as.
    pub fn username(&self) -> &str {
        &self.inner.username
    }

    fn annotate(&self, err: Error, operation: String) -> Error {
        err.in_operation(operation, self.inner.url.base())
    }

    async fn list<T: DeserializeOwned>(
        &self,
        context: &str,
        kind: EntityKind,
        include_format: bool,
    ) -> Result<Vec<T>> {
        let path = endpoints::entity_list(context, kind, include_format);
        let response = self
            .inner
            .dispatcher
            .send(&path, Method::GET, None, true)
            .await?;

        decode(response)
            .await
            .map_err(|e| self.annotate(e, format!("can't get {} of {context}", kind.as_str())))
    }
}

fn write_method(method: WriteMethod) -> Method {
    match method {
        WriteMethod::Put => Method::PUT,
        WriteMethod::Post => Method::POST,
        WriteMethod::Patch => Method::PATCH,
    }
}

#[async_trait]
impl Aggregator for HttpAggregator {
    fn url(&self) -> &ServerUrl {
        &self.inner.url
    }

    #[instrument(skip(self, request), fields(url = %self.inner.url, expression = %request.expression))]
    async fn evaluate<T>(&self, request: &EvaluateRequest) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!("Evaluating expression");
        let payload = Payload::json(request)?;
        let response = self
            .inner
            .dispatcher
            .send(EVALUATE, Method::POST, Some(&payload), true)
            .await?;

        decode::<ResultEnvelope<T>>(response)
            .await
            .map(ResultEnvelope::into_inner)
            .map_err(|e| {
                self.annotate(e, format!("can't evaluate '{}'", request.expression))
            })
    }

    #[instrument(skip(self), fields(url = %self.inner.url))]
    async fn get_variables(&self, context: &str, include_format: bool) -> Result<Vec<Variable>> {
        debug!("Listing variables");
        self.list(context, EntityKind::Variables, include_format)
            .await
    }

    #[instrument(skip(self), fields(url = %self.inner.url))]
    async fn get_functions(&self, context: &str, include_format: bool) -> Result<Vec<Function>> {
        debug!("Listing functions");
        self.list(context, EntityKind::Functions, include_format)
            .await
    }

    #[instrument(skip(self), fields(url = %self.inner.url))]
    async fn get_events(&self, context: &str, include_format: bool) -> Result<Vec<Event>> {
        debug!("Listing events");
        self.list(context, EntityKind::Events, include_format).await
    }

    #[instrument(skip(self), fields(url = %self.inner.url))]
    async fn get_variable<T>(
        &self,
        context: &str,
        variable: &str,
        limit: u32,
        offset: u32,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!("Reading variable");
        let path = endpoints::variable_read(context, variable, limit, offset);
        let response = self
            .inner
            .dispatcher
            .send(&path, Method::GET, None, true)
            .await?;

        decode(response)
            .await
            .map_err(|e| self.annotate(e, format!("can't get variable {context}:{variable}")))
    }

    #[instrument(skip(self, value), fields(url = %self.inner.url))]
    async fn update_variable(
        &self,
        context: &str,
        variable: &str,
        value: Payload,
        method: WriteMethod,
    ) -> Result<()> {
        debug!("Writing variable");
        let path = endpoints::variable_write(context, variable);
        let response = self
            .inner
            .dispatcher
            .send(&path, write_method(method), Some(&value), true)
            .await?;

        expect_success(response).await.map_err(|e| {
            self.annotate(e, format!("can't update variable {context}:{variable}"))
        })
    }

    #[instrument(skip(self, input), fields(url = %self.inner.url))]
    async fn do_function<T>(
        &self,
        context: &str,
        function: &str,
        input: Option<Payload>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!("Calling function");
        let path = endpoints::function_call(context, function);
        let input = input.unwrap_or_else(Payload::empty_table);
        let response = self
            .inner
            .dispatcher
            .send(&path, Method::POST, Some(&input), true)
            .await?;

        decode(response)
            .await
            .map_err(|e| self.annotate(e, format!("can't do function {context}:{function}()")))
    }
}

impl std::fmt::Debug for HttpAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAggregator")
            .field("url", &self.inner.url)
            .field("username", &self.inner.username)
            .field("session", &"[REDACTED]")
            .finish()
    }
}
