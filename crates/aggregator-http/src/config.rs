//! Client configuration.

use std::time::Duration;

use aggregator_core::{Credentials, ServerUrl};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Refresh interval used when none is configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Settings for an [`HttpAggregator`](crate::HttpAggregator).
///
/// Immutable once handed to the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    url: ServerUrl,
    credentials: Credentials,
    refresh_interval: Duration,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    /// Configuration with the default refresh interval and no timeout.
    pub fn new(url: ServerUrl, credentials: Credentials) -> Self {
        Self {
            url,
            credentials,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            timeout: None,
            user_agent: concat!("aggregator-http/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// How long a session token is used before it is renewed.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Same as [`with_refresh_interval`](Self::with_refresh_interval), in milliseconds.
    pub fn with_refresh_interval_millis(self, millis: u64) -> Self {
        self.with_refresh_interval(Duration::from_millis(millis))
    }

    /// Deadline applied by the transport to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn url(&self) -> &ServerUrl {
        &self.url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Refresh interval in whole milliseconds, saturating.
    pub(crate) fn refresh_interval_millis(&self) -> i64 {
        i64::try_from(self.refresh_interval.as_millis()).unwrap_or(i64::MAX)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new(
            ServerUrl::new("http://localhost:8080").unwrap(),
            Credentials::new("admin", "secret"),
        )
    }

    #[test]
    fn defaults() {
        let config = config();
        assert_eq!(config.refresh_interval(), DEFAULT_REFRESH_INTERVAL);
        assert!(config.timeout().is_none());
        assert!(config.user_agent().starts_with("aggregator-http/"));
    }

    #[test]
    fn refresh_interval_in_millis() {
        let config = config().with_refresh_interval_millis(1500);
        assert_eq!(config.refresh_interval_millis(), 1500);

        let config = config.with_refresh_interval(Duration::MAX);
        assert_eq!(config.refresh_interval_millis(), i64::MAX);
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("secret"));
    }
}
