//! Core traits for aggregator backends.

mod aggregator;

pub use aggregator::Aggregator;
