//! Analysis modules.
//!
//! Aggregation of provider output into summary counts and a verdict.

pub mod aggregator;

pub use aggregator::*;
