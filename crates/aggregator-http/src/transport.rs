//! HTTP transport.
//!
//! Builds the wire request for a path under `/rest` and sends it. Knows
//! nothing about sessions or endpoint semantics.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use tracing::{debug, instrument, trace};

use aggregator_core::error::TransportError;
use aggregator_core::{Error, ServerUrl, SessionToken};

use crate::config::{ClientConfig, JSON_CONTENT_TYPE};

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
    url: ServerUrl,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;

        Ok(Self {
            client,
            url: config.url().clone(),
        })
    }

    pub(crate) fn url(&self) -> &ServerUrl {
        &self.url
    }

    /// Send `method {base}/rest{path}`.
    ///
    /// The bearer header is attached only for a non-empty token.
    #[instrument(skip(self, body, token), fields(url = %self.url))]
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        token: Option<&SessionToken>,
    ) -> Result<Response, TransportError> {
        let url = self.url.rest_url(path);
        debug!(%method, path, "sending request");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header(AUTHORIZATION, token.bearer());
        }

        if let Some(body) = body {
            trace!(len = body.len(), "request body");
            request = request.body(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        trace!(status = %response.status(), "response received");
        Ok(response)
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_body() || err.is_decode() {
        TransportError::Body {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aggregator_core::Credentials;

    #[test]
    fn transport_creation() {
        let url = ServerUrl::new("http://localhost:8080").unwrap();
        let config = ClientConfig::new(url.clone(), Credentials::new("a", "b"));
        let transport = Transport::new(&config).unwrap();
        assert_eq!(transport.url(), &url);
    }

    #[tokio::test]
    async fn unreachable_host_is_connection_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = ServerUrl::new(format!("http://127.0.0.1:{port}")).unwrap();
        let config = ClientConfig::new(url, Credentials::new("a", "b"));
        let transport = Transport::new(&config).unwrap();

        let err = transport
            .execute(Method::GET, "/auth", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connection { .. }));
    }
}
