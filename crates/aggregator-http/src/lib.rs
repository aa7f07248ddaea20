//! aggregator-http - reqwest-backed client for the aggregator service.
//!
//! [`HttpAggregator`] authenticates on demand, renews its session token once
//! the configured refresh interval has elapsed, and exposes the service
//! operations through the [`Aggregator`](aggregator_core::Aggregator) trait.
//!
//! # Example
//!
//! ```no_run
//! use aggregator_core::{Aggregator, Credentials, EvaluateRequest, ServerUrl};
//! use aggregator_http::{ClientConfig, HttpAggregator};
//!
//! # async fn example() -> aggregator_core::Result<()> {
//! let url = ServerUrl::new("http://localhost:8080")?;
//! let config = ClientConfig::new(url, Credentials::new("admin", "admin"))
//!     .with_refresh_interval_millis(60_000);
//! let client = HttpAggregator::connect(config).await?;
//!
//! let two: i64 = client.evaluate(&EvaluateRequest::new("1+1")).await?;
//! assert_eq!(two, 2);
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod decode;
mod dispatch;
mod endpoints;
mod transport;

pub use client::HttpAggregator;
pub use config::{ClientConfig, DEFAULT_REFRESH_INTERVAL, JSON_CONTENT_TYPE};
