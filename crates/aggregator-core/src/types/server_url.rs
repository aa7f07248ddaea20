//! Service base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Fixed prefix every REST endpoint lives under.
pub const REST_PREFIX: &str = "/rest";

/// A validated aggregator base URL.
///
/// Must be an absolute `http` or `https` URL with a host. A deployment may
/// sit under a path prefix (`https://host/aggregate`); trailing slashes are
/// dropped so endpoint paths join cleanly.
///
/// # Example
///
/// ```
/// use aggregator_core::ServerUrl;
///
/// let url = ServerUrl::new("http://aggregate.local:8080/").unwrap();
/// assert_eq!(url.rest_url("/auth"), "http://aggregate.local:8080/rest/auth");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, has no host, or uses a
    /// scheme other than http/https.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL of a REST endpoint: `{base}/rest{path}`.
    ///
    /// `path` starts with `/` and may carry a query string.
    pub fn rest_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base(), REST_PREFIX, path)
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{scheme}', expected http or https"),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.base())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.base()
    }
}
