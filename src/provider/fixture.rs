//! Canned checklist returned by the mock provider.

use crate::models::{Category, Check, CheckStatus};

fn check(title: &str, description: &str, status: CheckStatus, details: &str) -> Check {
    Check::new(title, description, status).with_details(details)
}

/// Build the six fixture categories.
pub fn sample_categories() -> Vec<Category> {
    use CheckStatus::{Fail, Pass, Warning};

    vec![
        Category::new(
            "Brand Colors",
            vec![
                check(
                    "Primary Blue (#0070E0)",
                    "Verify primary Docusign blue is used correctly",
                    Pass,
                    "Found 12 instances of primary blue. All usage follows brand guidelines.",
                ),
                check(
                    "Secondary Yellow (#FFD200)",
                    "Check proper usage of Docusign yellow accent",
                    Pass,
                    "Yellow accent color used appropriately in 3 CTA elements.",
                ),
                check(
                    "Neutral Grays",
                    "Ensure neutral colors follow brand palette",
                    Pass,
                    "All gray tones match approved brand palette (#484848, #6B6B6B, #E5E5E5).",
                ),
                check(
                    "Color Contrast",
                    "Verify WCAG AA compliance for text contrast",
                    Fail,
                    "Footer text has insufficient contrast (3.2:1). Minimum required: 4.5:1.",
                ),
            ],
        ),
        Category::new(
            "Voice & Tone",
            vec![
                check(
                    "Professional Tone",
                    "Confirm content maintains professional, approachable voice",
                    Pass,
                    "Content tone is consistently professional and user-friendly.",
                ),
                check(
                    "Action-Oriented Language",
                    "CTAs use clear, action-oriented verbs",
                    Pass,
                    "All CTAs use approved action verbs: 'Start', 'Explore', 'Learn', 'Get'.",
                ),
                check(
                    "Benefit-Focused Messaging",
                    "Headlines emphasize customer benefits",
                    Warning,
                    "2 of 5 headlines are feature-focused. Consider rewriting to emphasize benefits.",
                ),
            ],
        ),
        Category::new(
            "Spacing & Layout",
            vec![
                check(
                    "Module Padding (Desktop)",
                    "Verify consistent spacing between page modules",
                    Pass,
                    "All modules use 80px vertical padding as specified in design system.",
                ),
                check(
                    "Module Padding (Mobile)",
                    "Check responsive spacing for mobile views",
                    Pass,
                    "Mobile spacing correctly adjusted to 48px between modules.",
                ),
                check(
                    "Grid Alignment",
                    "Ensure content aligns to 12-column grid",
                    Pass,
                    "All content properly aligned to grid system. No orphaned elements.",
                ),
                check(
                    "White Space Balance",
                    "Verify appropriate breathing room around content",
                    Fail,
                    "Hero section appears cramped. Increase internal padding by 24px minimum.",
                ),
            ],
        ),
        Category::new(
            "Copy Compliance",
            vec![
                check(
                    "Sentence Case Headers",
                    "Confirm headers use sentence case (not title case)",
                    Fail,
                    "3 headers use title case: 'Transform Your Business', 'Accelerate Your Workflow', 'Enhance Your Security'. Should be sentence case.",
                ),
                check(
                    "Punctuation Consistency",
                    "Check for consistent punctuation in lists and descriptions",
                    Pass,
                    "All bullet points and list items follow consistent punctuation rules.",
                ),
                check(
                    "Oxford Comma Usage",
                    "Verify Oxford comma is used in series",
                    Pass,
                    "Oxford comma correctly used in all series throughout page.",
                ),
                check(
                    "Trademark Symbols",
                    "Ensure Docusign® trademark is properly marked",
                    Warning,
                    "Docusign trademark symbol missing in 2 instances in body copy.",
                ),
                check(
                    "Product Name Consistency",
                    "Verify product names match official branding",
                    Pass,
                    "All product names correctly formatted: Docusign eSignature, Docusign CLM.",
                ),
                check(
                    "Prohibited Terms",
                    "Check for non-approved terminology or jargon",
                    Pass,
                    "No prohibited terms detected. All language approved.",
                ),
            ],
        ),
        Category::new(
            "Typography",
            vec![
                check(
                    "Font Family",
                    "Verify approved brand fonts are used",
                    Pass,
                    "All text uses approved fonts: Inter for body, headings follow hierarchy.",
                ),
                check(
                    "Font Size Hierarchy",
                    "Check font sizes match design system scale",
                    Pass,
                    "Typography scale correctly implemented across all breakpoints.",
                ),
                check(
                    "Line Height",
                    "Verify line spacing for readability",
                    Pass,
                    "Line height set to 1.5-1.6 for body text. Meets accessibility standards.",
                ),
            ],
        ),
        Category::new(
            "Imagery & Media",
            vec![
                check(
                    "Image Quality",
                    "Ensure images meet minimum resolution requirements",
                    Pass,
                    "All images are high resolution (2x retina ready) and optimized for web.",
                ),
                check(
                    "Alt Text",
                    "Verify all images have descriptive alt text",
                    Warning,
                    "2 decorative images missing empty alt attributes. Add alt='' for screen readers.",
                ),
                check(
                    "Brand Photography Style",
                    "Confirm images match Docusign photography guidelines",
                    Pass,
                    "All photos follow brand style: authentic, diverse, professional settings.",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Summary;

    #[test]
    fn test_fixture_categories_in_order() {
        let names: Vec<String> = sample_categories()
            .into_iter()
            .map(|c| c.category)
            .collect();

        assert_eq!(
            names,
            vec![
                "Brand Colors",
                "Voice & Tone",
                "Spacing & Layout",
                "Copy Compliance",
                "Typography",
                "Imagery & Media",
            ]
        );
    }

    #[test]
    fn test_fixture_per_category_distribution() {
        let expected: [(usize, usize, usize, usize); 6] = [
            (4, 3, 1, 0),
            (3, 2, 0, 1),
            (4, 3, 1, 0),
            (6, 4, 1, 1),
            (3, 3, 0, 0),
            (3, 2, 0, 1),
        ];

        for (category, (total, passed, failed, warnings)) in
            sample_categories().iter().zip(expected)
        {
            let summary = Summary::from_checks(&category.checks);
            assert_eq!(
                summary,
                Summary {
                    total,
                    passed,
                    failed,
                    warnings
                },
                "unexpected counts for {}",
                category.category
            );
        }
    }

    #[test]
    fn test_fixture_checks_all_have_details() {
        for category in sample_categories() {
            for check in category.checks {
                assert!(!check.title.is_empty());
                assert!(check.details.is_some(), "{} has no details", check.title);
            }
        }
    }
}
