//! Request body representation.

use serde::Serialize;

use crate::error::{Error, InvalidInputError};

/// A request body, either sent verbatim or serialized to JSON.
///
/// The choice is made by the caller: `&str`/`String` convert into
/// [`Payload::Raw`], `serde_json::Value` converts into
/// [`Payload::Structured`], and any other serializable value goes through
/// [`Payload::json`].
///
/// ```
/// use aggregator_core::Payload;
///
/// let raw = Payload::from("[]");
/// assert_eq!(raw.to_body().unwrap(), "[]");
///
/// let structured = Payload::from(serde_json::json!({"value": 5}));
/// assert_eq!(structured.to_body().unwrap(), r#"{"value":5}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Text passed through without modification.
    Raw(String),
    /// A JSON value, serialized when the request is built.
    Structured(serde_json::Value),
}

impl Payload {
    /// Body sent to a function invoked without input: an empty table.
    pub fn empty_table() -> Self {
        Payload::Raw("[]".to_string())
    }

    /// Capture any serializable value as a structured payload.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(value).map_err(|e| InvalidInputError::Body {
            reason: e.to_string(),
        })?;
        Ok(Payload::Structured(value))
    }

    /// Serialize into the exact text placed on the wire.
    pub fn to_body(&self) -> Result<String, Error> {
        match self {
            Payload::Raw(text) => Ok(text.clone()),
            Payload::Structured(value) => serde_json::to_string(value).map_err(|e| {
                Error::from(InvalidInputError::Body {
                    reason: e.to_string(),
                })
            }),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Raw(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Raw(text)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Structured(value)
    }
}
