//! Request and response envelopes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /auth`.
#[derive(Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for AuthRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body returned by `/auth` and `/refresh`.
#[derive(Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Generic `{ "result": T }` wrapper used by evaluation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

impl<T> ResultEnvelope<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.result
    }
}

/// Body of `POST /v1/evaluate`.
///
/// ```
/// use aggregator_core::EvaluateRequest;
///
/// let req = EvaluateRequest::new("1+1").with_context("users.admin");
/// assert_eq!(req.default_table, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub expression: String,
    /// Encoded table the expression is evaluated against; sent as `null` when absent.
    pub default_table: Option<String>,
    /// Context path references resolve against; empty for the root.
    pub default_context: String,
}

impl EvaluateRequest {
    /// Evaluate an expression with no default table in the root context.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            default_table: None,
            default_context: String::new(),
        }
    }

    /// Set the default table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.default_table = Some(table.into());
        self
    }

    /// Set the default context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.default_context = context.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn evaluate_request_wire_shape() {
        let value = serde_json::to_value(EvaluateRequest::new("1+1")).unwrap();
        assert_eq!(
            value,
            json!({"expression": "1+1", "defaultTable": null, "defaultContext": ""})
        );
    }

    #[test]
    fn result_envelope_unwraps() {
        let env: ResultEnvelope<i64> = serde_json::from_str(r#"{"result":2}"#).unwrap();
        assert_eq!(env.into_inner(), 2);
    }

    #[test]
    fn auth_request_keys() {
        let req = AuthRequest {
            username: "admin",
            password: "pw",
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"username": "admin", "password": "pw"})
        );
    }
}
