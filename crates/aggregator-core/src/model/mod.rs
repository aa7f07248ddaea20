//! Wire data model.
//!
//! Shapes exchanged with the service. The client never interprets them
//! beyond (de)serialization.

mod context;
mod envelope;
mod rule;

pub use context::{Event, Function, Variable};
pub use envelope::{AuthRequest, AuthResponse, EvaluateRequest, ResultEnvelope};
pub use rule::{Rule, RuleSet};
