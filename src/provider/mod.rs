//! Analysis providers.
//!
//! A provider takes a target and a credential and produces the categorized
//! checks for that target. The aggregator and exporter only see the
//! categories, so providers can be swapped freely.

pub mod file;
pub mod fixture;
pub mod mock;

pub use file::FileProvider;
pub use mock::MockProvider;

use crate::error::Result;
use crate::models::Category;
use async_trait::async_trait;

/// Produces categorized checks for a target.
///
/// One call is one logical operation: results arrive all at once or not
/// at all. Implementations may assume both inputs are non-empty.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, target: &str, credential: &str) -> Result<Vec<Category>>;
}
