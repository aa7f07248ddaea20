//! Error types for the aggregator client.
//!
//! Each failure family has its own type so callers can match on exactly the
//! layer that failed: the credential exchange, the network, the service's
//! status code, or the shape of a response body.

use std::fmt;
use thiserror::Error;

/// The unified error type for aggregator operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The credential exchange with the service failed.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The service answered with a non-success status.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A success response carried a body of the wrong shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (bad base URL, unserializable body).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A failed operation, annotated with what was being attempted.
    #[error("{operation} from {url}: {source}")]
    Operation {
        operation: String,
        url: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the operation and base URL it occurred under.
    pub fn in_operation(self, operation: impl Into<String>, url: impl Into<String>) -> Self {
        Error::Operation {
            operation: operation.into(),
            url: url.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through operation annotations.
    pub fn root(&self) -> &Error {
        match self {
            Error::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status reported by the service, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Error::Api(e) => Some(e.status),
            Error::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Check if the service rejected the session or the credentials.
    pub fn is_auth_error(&self) -> bool {
        match self.root() {
            Error::Auth(_) => true,
            Error::Api(e) => e.is_unauthorized(),
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be read to the end.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Failures of the `/auth` and `/refresh` credential exchanges.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service refused the exchange.
    #[error("credential exchange rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The exchange never got a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The exchange succeeded but the token could not be read from the body.
    #[error(transparent)]
    MalformedResponse(#[from] DecodeError),
}

/// A non-success response, body preserved verbatim.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed with status {}", self.status)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the service refused the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// A response body that did not match the expected shape.
#[derive(Debug, Error)]
#[error("failed to decode response body as {target}: {source}")]
pub struct DecodeError {
    /// Name of the type the body was decoded into.
    pub target: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Create a decode error for target type `T`.
    pub fn for_type<T: ?Sized>(source: serde_json::Error) -> Self {
        Self {
            target: std::any::type_name::<T>(),
            source,
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service base URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// A structured request body could not be serialized.
    #[error("request body could not be serialized: {reason}")]
    Body { reason: String },

    /// Unknown write method name.
    #[error("unsupported write method '{value}'")]
    Method { value: String },
}
