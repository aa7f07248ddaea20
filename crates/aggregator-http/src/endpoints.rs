//! Endpoint paths, relative to `{base}/rest`.
//!
//! Context and entity names are inserted as given. Context paths are dotted
//! identifiers (`users.admin.devices.dev1`) and need no escaping.

// ============================================================================
// Session
// ============================================================================

/// Full login with username and password.
pub const AUTH: &str = "/auth";

/// Extension of the current session token.
pub const REFRESH: &str = "/refresh";

// ============================================================================
// Operations
// ============================================================================

/// Expression evaluation.
pub const EVALUATE: &str = "/v1/evaluate";

/// Entity kinds listed under a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Variables,
    Functions,
    Events,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Variables => "variables",
            EntityKind::Functions => "functions",
            EntityKind::Events => "events",
        }
    }
}

/// `/v1/contexts/{ctx}/{kind}?includeFormat={bool}`
pub fn entity_list(context: &str, kind: EntityKind, include_format: bool) -> String {
    format!(
        "/v1/contexts/{context}/{}?includeFormat={include_format}",
        kind.as_str()
    )
}

/// `/v1/contexts/{ctx}/variables/{name}?limit={n}&offset={n}`
pub fn variable_read(context: &str, variable: &str, limit: u32, offset: u32) -> String {
    format!("/v1/contexts/{context}/variables/{variable}?limit={limit}&offset={offset}")
}

/// `/v1/contexts/{ctx}/variables/{name}`
pub fn variable_write(context: &str, variable: &str) -> String {
    format!("/v1/contexts/{context}/variables/{variable}")
}

/// `/v1/contexts/{ctx}/functions/{name}`
pub fn function_call(context: &str, function: &str) -> String {
    format!("/v1/contexts/{context}/functions/{function}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_paths_carry_include_format() {
        assert_eq!(
            entity_list("ctxA", EntityKind::Variables, true),
            "/v1/contexts/ctxA/variables?includeFormat=true"
        );
        assert_eq!(
            entity_list("users.admin", EntityKind::Events, false),
            "/v1/contexts/users.admin/events?includeFormat=false"
        );
    }

    #[test]
    fn variable_paths() {
        assert_eq!(
            variable_read("ctx", "status", 10, 20),
            "/v1/contexts/ctx/variables/status?limit=10&offset=20"
        );
        assert_eq!(variable_write("ctx", "status"), "/v1/contexts/ctx/variables/status");
    }

    #[test]
    fn function_path() {
        assert_eq!(function_call("ctx", "restart"), "/v1/contexts/ctx/functions/restart");
    }
}
