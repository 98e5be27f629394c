//! Check aggregation and statistics.
//!
//! This module turns the categories returned by a provider into summary
//! counts, per-category counts and the overall verdict.

use crate::models::{
    AnalysisReport, Category, CategorySummary, Check, CheckStatus, OverallStatus, Summary,
};
use tracing::debug;

/// Aggregate categories into a report.
///
/// Categories and checks keep the order they were received in. The result
/// depends only on the input, so calling this twice yields equal reports.
pub fn aggregate(categories: &[Category]) -> AnalysisReport {
    let mut summary = Summary::default();
    let mut by_category = Vec::with_capacity(categories.len());

    for category in categories {
        let counts = Summary::from_checks(&category.checks);
        for check in &category.checks {
            summary.record(check.status);
        }
        by_category.push(CategorySummary {
            category: category.category.clone(),
            counts,
        });
    }

    let overall_status = OverallStatus::from_summary(&summary);

    debug!(
        "Aggregated {} checks across {} categories: {} passed, {} failed, {} warnings",
        summary.total,
        categories.len(),
        summary.passed,
        summary.failed,
        summary.warnings
    );

    AnalysisReport {
        overall_status,
        summary,
        by_category,
        categories: categories.to_vec(),
    }
}

/// Collect checks with the given status, paired with their category label.
pub fn checks_with_status(
    categories: &[Category],
    status: CheckStatus,
) -> Vec<(&str, &Check)> {
    categories
        .iter()
        .flat_map(|c| {
            c.checks
                .iter()
                .filter(move |check| check.status == status)
                .map(move |check| (c.category.as_str(), check))
        })
        .collect()
}

/// Every failed check in the report, in display order.
pub fn failing_checks(report: &AnalysisReport) -> Vec<(&str, &Check)> {
    checks_with_status(&report.categories, CheckStatus::Fail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_check(title: &str, status: CheckStatus) -> Check {
        Check::new(title, "Test description", status)
    }

    fn category_of(name: &str, statuses: &[CheckStatus]) -> Category {
        Category::new(
            name,
            statuses
                .iter()
                .enumerate()
                .map(|(i, s)| create_test_check(&format!("{} #{}", name, i + 1), *s))
                .collect(),
        )
    }

    #[test]
    fn test_single_category_with_failure() {
        use CheckStatus::*;
        let categories = vec![category_of("Brand Colors", &[Pass, Pass, Pass, Fail])];

        let report = aggregate(&categories);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.passed, 3);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.warnings, 0);
        assert_eq!(report.overall_status, OverallStatus::Fail);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        use CheckStatus::*;
        let categories = vec![
            category_of("Voice & Tone", &[Pass, Warning]),
            category_of("Typography", &[Pass, Pass]),
        ];

        let report = aggregate(&categories);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.passed, 3);
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.summary.warnings, 1);
        assert_eq!(report.overall_status, OverallStatus::Pass);
    }

    #[test]
    fn test_empty_input() {
        let report = aggregate(&[]);

        assert_eq!(report.summary, Summary::default());
        assert_eq!(report.overall_status, OverallStatus::Pass);
        assert!(report.by_category.is_empty());
        assert!(report.categories.is_empty());
    }

    #[test]
    fn test_empty_category_is_counted_as_zero() {
        use CheckStatus::*;
        let categories = vec![category_of("Imagery", &[]), category_of("Copy", &[Fail])];

        let report = aggregate(&categories);

        assert_eq!(report.by_category.len(), 2);
        assert_eq!(report.by_category[0].counts, Summary::default());
        assert_eq!(report.by_category[1].counts.failed, 1);
        assert_eq!(report.summary.total, 1);
    }

    #[test]
    fn test_order_preserved() {
        use CheckStatus::*;
        let categories = vec![
            category_of("Zeta", &[Fail, Pass]),
            category_of("Alpha", &[Warning]),
        ];

        let report = aggregate(&categories);

        assert_eq!(report.categories, categories);
        assert_eq!(report.by_category[0].category, "Zeta");
        assert_eq!(report.by_category[1].category, "Alpha");
    }

    #[test]
    fn test_failing_checks() {
        use CheckStatus::*;
        let categories = vec![
            category_of("Brand Colors", &[Pass, Fail]),
            category_of("Copy", &[Fail, Warning]),
        ];

        let report = aggregate(&categories);
        let failing = failing_checks(&report);

        assert_eq!(failing.len(), 2);
        assert_eq!(failing[0].0, "Brand Colors");
        assert_eq!(failing[0].1.title, "Brand Colors #2");
        assert_eq!(failing[1].0, "Copy");
    }

    #[test]
    fn test_checks_with_status() {
        use CheckStatus::*;
        let categories = vec![category_of("Copy", &[Warning, Pass, Warning])];

        let warnings = checks_with_status(&categories, Warning);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|(_, c)| c.status == Warning));
    }

    fn arb_status() -> impl Strategy<Value = CheckStatus> {
        prop_oneof![
            Just(CheckStatus::Pass),
            Just(CheckStatus::Fail),
            Just(CheckStatus::Warning),
        ]
    }

    fn arb_categories() -> impl Strategy<Value = Vec<Category>> {
        prop::collection::vec(
            ("[A-Za-z ]{1,12}", prop::collection::vec(arb_status(), 0..8))
                .prop_map(|(name, statuses)| category_of(&name, &statuses)),
            0..6,
        )
    }

    proptest! {
        #[test]
        fn prop_statuses_partition_total(categories in arb_categories()) {
            let report = aggregate(&categories);
            let s = report.summary;
            let expected: usize = categories.iter().map(|c| c.checks.len()).sum();

            prop_assert_eq!(s.total, expected);
            prop_assert_eq!(s.passed + s.failed + s.warnings, s.total);
        }

        #[test]
        fn prop_fail_iff_any_failed(categories in arb_categories()) {
            let report = aggregate(&categories);
            let any_failed = categories
                .iter()
                .flat_map(|c| &c.checks)
                .any(|c| c.status == CheckStatus::Fail);

            prop_assert_eq!(report.overall_status == OverallStatus::Fail, any_failed);
        }

        #[test]
        fn prop_category_counts_sum_to_total(categories in arb_categories()) {
            let report = aggregate(&categories);
            let mut sum = Summary::default();
            for c in &report.by_category {
                sum.total += c.counts.total;
                sum.passed += c.counts.passed;
                sum.failed += c.counts.failed;
                sum.warnings += c.counts.warnings;
            }

            prop_assert_eq!(sum, report.summary);
        }

        #[test]
        fn prop_aggregate_is_idempotent(categories in arb_categories()) {
            prop_assert_eq!(aggregate(&categories), aggregate(&categories));
        }
    }
}
