//! Request dispatch: session check, body serialization, send.

use reqwest::{Method, Response};
use tracing::instrument;

use aggregator_core::{Error, Payload};

use crate::auth::Authenticator;
use crate::transport::Transport;

#[derive(Debug)]
pub(crate) struct Dispatcher {
    transport: Transport,
    auth: Authenticator,
}

impl Dispatcher {
    pub(crate) fn new(transport: Transport, auth: Authenticator) -> Self {
        Self { transport, auth }
    }

    pub(crate) fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Send a request and hand back the unread response.
    ///
    /// With `attach_auth` the session is made fresh first. The current token
    /// is attached whenever one is held.
    #[instrument(skip(self, body), fields(url = %self.transport.url()))]
    pub(crate) async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<&Payload>,
        attach_auth: bool,
    ) -> Result<Response, Error> {
        let token = if attach_auth {
            self.auth.ensure_authenticated(&self.transport).await?
        } else {
            self.auth.current_token().await
        };

        let body = body.map(Payload::to_body).transpose()?;

        let response = self
            .transport
            .execute(method, path, body, token.as_ref())
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aggregator_core::{Credentials, ServerUrl};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;

    fn dispatcher(server: &MockServer) -> Dispatcher {
        let url = ServerUrl::new(server.uri()).unwrap();
        let config = ClientConfig::new(url, Credentials::new("admin", "secret"));
        Dispatcher::new(
            Transport::new(&config).unwrap(),
            Authenticator::new(config.credentials().clone(), config.refresh_interval_millis()),
        )
    }

    #[tokio::test]
    async fn unauthenticated_send_skips_login() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"t"}"#))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/rest/v1/ping"))
            .and(header("content-type", "application/json;charset=utf-8"))
            .and(body_string("raw text"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher(&server);
        let payload = Payload::from("raw text");
        let response = dispatcher
            .send("/v1/ping", Method::PUT, Some(&payload), false)
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 204);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn authenticated_send_attaches_bearer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"abc"}"#))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/ping"))
            .and(header("authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher(&server);
        let response = dispatcher
            .send("/v1/ping", Method::GET, None, true)
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert!(dispatcher.authenticator().current_token().await.is_some());
    }
}
