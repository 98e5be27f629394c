//! Simulated provider.
//!
//! Waits for a fixed latency, then returns the canned fixture regardless of
//! the target or credential it was given.

use super::fixture::sample_categories;
use super::AnalysisProvider;
use crate::error::Result;
use crate::models::Category;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Default simulated latency in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 2500;

/// Provider that returns the built-in fixture after a delay.
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl MockProvider {
    /// Create a mock provider with the given latency.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl AnalysisProvider for MockProvider {
    async fn analyze(&self, target: &str, _credential: &str) -> Result<Vec<Category>> {
        info!("Connecting to preview environment: {}", target);
        debug!("Simulating analysis latency of {:?}", self.delay);

        tokio::time::sleep(self.delay).await;

        let categories = sample_categories();
        info!("Mock analysis returned {} categories", categories.len());
        Ok(categories)
    }
}
