//! State of the current analysis run.
//!
//! The session owns the current report, the in-flight flag and the last
//! analyzed target. All three are cleared together.

use crate::analysis::aggregate;
use crate::error::{QaError, Result};
use crate::models::AnalysisReport;
use crate::provider::AnalysisProvider;
use tracing::{debug, error, info};

/// Orchestrator state for one user at a time.
#[derive(Debug, Default)]
pub struct Session {
    report: Option<AnalysisReport>,
    analyzed_target: Option<String>,
    in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a provider call is pending.
    pub fn is_analyzing(&self) -> bool {
        self.in_flight
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn analyzed_target(&self) -> Option<&str> {
        self.analyzed_target.as_deref()
    }

    /// Run one analysis and keep its aggregated report.
    ///
    /// Any previous report is discarded before the provider is called. On
    /// failure the session is left in the ready state with no report.
    pub async fn analyze(
        &mut self,
        provider: &dyn AnalysisProvider,
        target: &str,
        credential: &str,
    ) -> Result<&AnalysisReport> {
        let target = target.trim();
        if target.is_empty() {
            return Err(QaError::MissingInput("url"));
        }
        if credential.trim().is_empty() {
            return Err(QaError::MissingInput("key"));
        }

        self.reset();
        self.in_flight = true;
        debug!("Analysis started for {}", target);

        let outcome = provider.analyze(target, credential).await;
        self.in_flight = false;

        match outcome {
            Ok(categories) => {
                let report = aggregate(&categories);
                info!(
                    "Analysis complete: {} ({} checks, {} failed)",
                    report.overall_status, report.summary.total, report.summary.failed
                );
                self.analyzed_target = Some(target.to_string());
                let report: &AnalysisReport = self.report.insert(report);
                Ok(report)
            }
            Err(e) => {
                error!("Analysis of {} failed: {}", target, e);
                self.reset();
                Err(e)
            }
        }
    }

    /// Adopt a report produced elsewhere, e.g. read back from an export.
    pub fn load(&mut self, target: impl Into<String>, report: AnalysisReport) -> &AnalysisReport {
        self.reset();
        self.analyzed_target = Some(target.into());
        self.report.insert(report)
    }

    /// Return to the ready state.
    pub fn reset(&mut self) {
        self.report = None;
        self.analyzed_target = None;
        self.in_flight = false;
    }
}
