//! Terminal rendering of an analysis report.

use super::generator::category_badges;
use crate::models::{AnalysisReport, OverallStatus};

/// Render the results view: verdict, summary counts and the full checklist.
pub fn render_results(report: &AnalysisReport, target: &str) -> String {
    let mut out = String::new();

    let verdict = match report.overall_status {
        OverallStatus::Pass => "🟢 PASS",
        OverallStatus::Fail => "🔴 FAIL",
    };

    out.push_str("\n📊 QA Analysis Results\n");
    out.push_str(&format!("   Page analyzed: {}\n", target));
    out.push_str(&format!("   Overall: {}\n\n", verdict));
    out.push_str(&format!(
        "   Total Checks: {} | ✅ Passed: {} | ❌ Failed: {} | ⚠️  Warnings: {}\n",
        report.summary.total, report.summary.passed, report.summary.failed, report.summary.warnings
    ));

    for (category, counts) in report.categories.iter().zip(&report.by_category) {
        out.push_str(&format!(
            "\n   {} [{}]\n",
            category.category,
            category_badges(&counts.counts)
        ));

        for check in &category.checks {
            out.push_str(&format!(
                "     {} {:<8} {}\n",
                check.status.emoji(),
                check.status.to_string(),
                check.title
            ));
            out.push_str(&format!("                 {}\n", check.description));
            if let Some(ref details) = check.details {
                out.push_str(&format!("                 ↳ {}\n", details));
            }
        }
    }

    out
}
