//! Report export.
//!
//! This module serializes an aggregated report into the exported JSON
//! snapshot, reads such snapshots back, and renders a Markdown checklist.

use crate::analysis::{aggregate, failing_checks};
use crate::error::{QaError, Result};
use crate::models::{AnalysisReport, Category, Check, OverallStatus, RawCategory, Summary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Export format for the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON snapshot (default)
    #[default]
    Json,
    /// Markdown checklist
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Self-describing snapshot written to `qa-report-<millis>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReport {
    /// The analyzed target.
    pub url: String,
    /// When the report was exported.
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub overall_status: OverallStatus,
    pub summary: Summary,
    /// Full category/check tree in display order.
    pub results: Vec<Category>,
}

impl ExportedReport {
    /// Build a snapshot of `report` for `target`.
    pub fn new(report: &AnalysisReport, target: &str, exported_at: DateTime<Utc>) -> Self {
        Self {
            url: target.to_string(),
            timestamp: exported_at,
            overall_status: report.overall_status,
            summary: report.summary,
            results: report.categories.clone(),
        }
    }

    /// Recompute the report from the stored results.
    ///
    /// Stored counts are not trusted; a mismatch is logged and the
    /// recomputed values win.
    pub fn to_report(&self) -> AnalysisReport {
        let report = aggregate(&self.results);
        if report.summary != self.summary || report.overall_status != self.overall_status {
            warn!(
                "Stored summary for {} does not match its results; using recomputed counts",
                self.url
            );
        }
        report
    }
}

/// Export as read from disk, before the results are validated.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExportedReport {
    url: String,
    #[serde(with = "iso_millis")]
    timestamp: DateTime<Utc>,
    overall_status: OverallStatus,
    summary: Summary,
    results: Vec<RawCategory>,
}

impl TryFrom<RawExportedReport> for ExportedReport {
    type Error = QaError;

    fn try_from(raw: RawExportedReport) -> Result<Self> {
        let results = raw
            .results
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            url: raw.url,
            timestamp: raw.timestamp,
            overall_status: raw.overall_status,
            summary: raw.summary,
            results,
        })
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// File name for an export made at `exported_at`.
pub fn export_file_name(exported_at: DateTime<Utc>, format: ExportFormat) -> String {
    format!(
        "qa-report-{}.{}",
        exported_at.timestamp_millis(),
        format.extension()
    )
}

/// Serialize a report to pretty-printed JSON bytes.
pub fn serialize_report(
    report: &AnalysisReport,
    target: &str,
    exported_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let exported = ExportedReport::new(report, target, exported_at);
    serde_json::to_vec_pretty(&exported).map_err(Into::into)
}

/// Parse bytes produced by [`serialize_report`].
///
/// Check statuses and titles are validated the same way as provider input.
pub fn parse_export(bytes: &[u8]) -> Result<ExportedReport> {
    let raw: RawExportedReport = serde_json::from_slice(bytes)?;
    ExportedReport::try_from(raw)
}

/// Render a report in the requested format.
pub fn render_report(
    report: &AnalysisReport,
    target: &str,
    exported_at: DateTime<Utc>,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => serialize_report(report, target, exported_at),
        ExportFormat::Markdown => {
            Ok(generate_markdown_report(report, target, exported_at).into_bytes())
        }
    }
}

/// Write rendered bytes to `path`.
pub fn write_report(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| QaError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Badge text for a category: passed always, failed and warnings only when non-zero.
pub fn category_badges(counts: &Summary) -> String {
    let mut badges = vec![format!("{} passed", counts.passed)];
    if counts.failed > 0 {
        badges.push(format!("{} failed", counts.failed));
    }
    if counts.warnings > 0 {
        badges.push(format!("{} warnings", counts.warnings));
    }
    badges.join(" · ")
}

/// Generate a Markdown checklist.
pub fn generate_markdown_report(
    report: &AnalysisReport,
    target: &str,
    exported_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push_str("# QA Analysis Results\n\n");
    output.push_str(&format!("- **Page analyzed:** {}\n", target));
    output.push_str(&format!(
        "- **Exported:** {}\n",
        exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("- **Overall status:** **{}**\n\n", report.overall_status));

    output.push_str(&generate_summary_section(&report.summary));
    output.push_str(&generate_failures_section(report));
    output.push_str(&generate_checklist_section(report));

    output
}

fn generate_summary_section(summary: &Summary) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str("| Total Checks | Passed | Failed | Warnings |\n");
    section.push_str("|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {} |\n\n",
        summary.total, summary.passed, summary.failed, summary.warnings
    ));

    section
}

fn generate_failures_section(report: &AnalysisReport) -> String {
    let failing = failing_checks(report);
    if failing.is_empty() {
        return String::new();
    }

    let mut section = String::new();
    section.push_str("## Failed Checks\n\n");
    for (category, check) in failing {
        section.push_str(&format!("- **{}**: {}\n", category, check.title));
    }
    section.push('\n');

    section
}

fn generate_checklist_section(report: &AnalysisReport) -> String {
    let mut section = String::new();

    section.push_str("## Detailed Checklist\n\n");

    for (category, counts) in report.categories.iter().zip(&report.by_category) {
        section.push_str(&format!(
            "### {}\n\n*{}*\n\n",
            category.category,
            category_badges(&counts.counts)
        ));

        for check in &category.checks {
            section.push_str(&generate_check_block(check));
        }
    }

    section
}

fn generate_check_block(check: &Check) -> String {
    let mut block = format!(
        "- {} **{}** `{}`\n  {}\n",
        check.status.emoji(),
        check.title,
        check.status,
        check.description
    );

    if let Some(ref details) = check.details {
        block.push_str(&format!("  > {}\n", details));
    }

    block
}
