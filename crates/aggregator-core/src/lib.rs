//! aggregator-core - Core types and traits for the aggregator service client.
//!
//! This crate holds everything that does not depend on a transport: the
//! error taxonomy, validated inputs, the wire data model and the
//! [`Aggregator`] trait describing the service operations.

pub mod credentials;
pub mod error;
pub mod model;
pub mod payload;
pub mod token;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use model::{
    AuthRequest, AuthResponse, EvaluateRequest, Event, Function, ResultEnvelope, Rule, RuleSet,
    Variable,
};
pub use payload::Payload;
pub use token::SessionToken;
pub use traits::Aggregator;
pub use types::{ServerUrl, WriteMethod};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
