//! Data models for the QA checklist.
//!
//! This module contains the core data structures used throughout
//! the application for representing checks, categories and reports.

use crate::error::{QaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check passed.
    Pass,
    /// The check failed. Any failure makes the whole report fail.
    Fail,
    /// Worth a look, but never fails the report on its own.
    Warning,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
            CheckStatus::Warning => write!(f, "WARNING"),
        }
    }
}

impl CheckStatus {
    /// Returns an emoji representation of the status.
    pub fn emoji(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✅",
            CheckStatus::Fail => "❌",
            CheckStatus::Warning => "⚠️",
        }
    }

    /// Parse the lowercase wire form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pass" => Some(CheckStatus::Pass),
            "fail" => Some(CheckStatus::Fail),
            "warning" => Some(CheckStatus::Warning),
            _ => None,
        }
    }
}

/// A single compliance check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Short name of the check.
    pub title: String,
    /// What the check verifies.
    pub description: String,
    /// Result of the check.
    pub status: CheckStatus,
    /// Optional elaboration on the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Check {
    /// Creates a check without details.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: CheckStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
            details: None,
        }
    }

    /// Attach details to the check.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A named group of checks. Check order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Label shown for the group.
    pub category: String,
    /// Checks in provider order.
    pub checks: Vec<Check>,
}

impl Category {
    pub fn new(category: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            category: category.into(),
            checks,
        }
    }
}

/// Check as read from untrusted input, before status validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCheck {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Category as read from untrusted input.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub category: String,
    #[serde(default)]
    pub checks: Vec<RawCheck>,
}

impl TryFrom<RawCategory> for Category {
    type Error = QaError;

    fn try_from(raw: RawCategory) -> Result<Self> {
        let mut checks = Vec::with_capacity(raw.checks.len());

        for check in raw.checks {
            if check.title.trim().is_empty() {
                return Err(QaError::Analysis(format!(
                    "Check without a title in category '{}'",
                    raw.category
                )));
            }

            let status = CheckStatus::parse(&check.status).ok_or_else(|| QaError::InvalidData {
                category: raw.category.clone(),
                check: check.title.clone(),
                value: check.status.clone(),
            })?;

            checks.push(Check {
                title: check.title,
                description: check.description,
                status,
                details: check.details,
            });
        }

        Ok(Category {
            category: raw.category,
            checks,
        })
    }
}

/// Binary verdict for a whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Pass,
    Fail,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Pass => write!(f, "PASS"),
            OverallStatus::Fail => write!(f, "FAIL"),
        }
    }
}

impl OverallStatus {
    /// FAIL iff at least one check failed. Warnings never fail a report.
    pub fn from_summary(summary: &Summary) -> Self {
        if summary.failed > 0 {
            OverallStatus::Fail
        } else {
            OverallStatus::Pass
        }
    }
}

/// Count of checks by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of checks.
    pub total: usize,
    /// Number of passed checks.
    pub passed: usize,
    /// Number of failed checks.
    pub failed: usize,
    /// Number of checks with warnings.
    pub warnings: usize,
}

impl Summary {
    /// Count one check with the given status.
    pub fn record(&mut self, status: CheckStatus) {
        self.total += 1;
        match status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Fail => self.failed += 1,
            CheckStatus::Warning => self.warnings += 1,
        }
    }

    /// Creates a summary from a list of checks.
    pub fn from_checks(checks: &[Check]) -> Self {
        let mut summary = Self::default();
        for check in checks {
            summary.record(check.status);
        }
        summary
    }
}

/// Counts scoped to one category, used for per-category badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub counts: Summary,
}

/// The aggregated output of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Verdict derived from `summary.failed`.
    pub overall_status: OverallStatus,
    /// Counts over every check.
    pub summary: Summary,
    /// Counts per category, in input order.
    pub by_category: Vec<CategorySummary>,
    /// Categories exactly as received from the provider.
    pub categories: Vec<Category>,
}
