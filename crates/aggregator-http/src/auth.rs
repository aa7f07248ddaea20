//! Session token lifecycle.
//!
//! The first exchange submits the credentials to `/auth`. Once a token is
//! held, an expired freshness window is handled by a bodiless `GET /refresh`
//! which extends the current token instead of logging in again.

use chrono::{DateTime, Utc};
use reqwest::Method;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use aggregator_core::error::{AuthError, DecodeError};
use aggregator_core::{AuthRequest, AuthResponse, Credentials, Error, Payload, SessionToken};

use crate::endpoints::{AUTH, REFRESH};
use crate::transport::{Transport, transport_error};

/// Token and the instant it was obtained. Always written together.
#[derive(Debug, Default)]
struct TokenState {
    token: Option<SessionToken>,
    last_auth: Option<DateTime<Utc>>,
}

impl TokenState {
    fn held(&self) -> Option<&SessionToken> {
        self.token.as_ref().filter(|t| !t.is_empty())
    }

    fn is_stale(&self, now: DateTime<Utc>, refresh_interval_millis: i64) -> bool {
        match (self.held(), self.last_auth) {
            (Some(_), Some(last)) => (now - last).num_milliseconds() >= refresh_interval_millis,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exchange {
    /// Full login with username and password.
    Issue,
    /// Extension of the token already held.
    Renew,
}

#[derive(Debug)]
pub(crate) struct Authenticator {
    credentials: Credentials,
    refresh_interval_millis: i64,
    state: Mutex<TokenState>,
}

impl Authenticator {
    pub(crate) fn new(credentials: Credentials, refresh_interval_millis: i64) -> Self {
        Self {
            credentials,
            refresh_interval_millis,
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Make sure the held token is fresh, exchanging credentials if not.
    ///
    /// Failures of the exchange itself are [`Error::Auth`]; a rejected
    /// exchange leaves the held token untouched. The state lock is held
    /// across the exchange so concurrent callers wait for one refresh
    /// instead of each issuing their own. Returns the token to attach to the
    /// next request.
    #[instrument(skip(self, transport), fields(url = %transport.url()))]
    pub(crate) async fn ensure_authenticated(
        &self,
        transport: &Transport,
    ) -> Result<Option<SessionToken>, Error> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if !state.is_stale(now, self.refresh_interval_millis) {
            return Ok(state.token.clone());
        }

        let exchange = match state.held() {
            None => Exchange::Issue,
            Some(_) => Exchange::Renew,
        };

        let token = self.exchange(transport, exchange, state.held()).await?;

        state.token = Some(token.clone());
        state.last_auth = Some(now);
        Ok(Some(token))
    }

    /// Token to attach to a request that does not require authentication.
    pub(crate) async fn current_token(&self) -> Option<SessionToken> {
        self.state.lock().await.held().cloned()
    }

    pub(crate) async fn last_authenticated(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.last_auth
    }

    /// Forget the session so the next call logs in from scratch.
    pub(crate) async fn reset(&self) {
        *self.state.lock().await = TokenState::default();
    }

    async fn exchange(
        &self,
        transport: &Transport,
        exchange: Exchange,
        current: Option<&SessionToken>,
    ) -> Result<SessionToken, Error> {
        let username = self.credentials.username();

        let response = match exchange {
            Exchange::Issue => {
                info!(username, "Issuing session token");
                let request = AuthRequest {
                    username,
                    password: self.credentials.password(),
                };
                let body = Payload::json(&request)?.to_body()?;
                transport
                    .execute(Method::POST, AUTH, Some(body), None)
                    .await
                    .map_err(AuthError::from)?
            }
            Exchange::Renew => {
                info!(username, "Renewing session token");
                transport
                    .execute(Method::GET, REFRESH, None, current)
                    .await
                    .map_err(AuthError::from)?
            }
        };

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::from(transport_error(e)))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(username, status = status.as_u16(), ?exchange, "Credential exchange rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: AuthResponse = serde_json::from_slice(&body)
            .map_err(|e| AuthError::from(DecodeError::for_type::<AuthResponse>(e)))?;

        debug!(?exchange, "Session token obtained");
        Ok(SessionToken::new(parsed.token))
    }
}
