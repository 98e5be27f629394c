//! Provider backed by a local JSON checklist.
//!
//! Accepts either a bare array of categories or a previously exported
//! report (the `results` field is used). Statuses are validated here, so
//! nothing outside `pass`, `fail`, `warning` reaches the aggregator.

use super::AnalysisProvider;
use crate::error::{QaError, Result};
use crate::models::{Category, RawCategory};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum ChecklistDocument {
    Categories(Vec<RawCategory>),
    Exported { results: Vec<RawCategory> },
}

/// Provider that reads categories from a JSON file.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate a checklist document.
    pub fn parse(content: &str) -> Result<Vec<Category>> {
        let document: ChecklistDocument = serde_json::from_str(content)
            .map_err(|e| QaError::Analysis(format!("Malformed checklist: {}", e)))?;

        let raw = match document {
            ChecklistDocument::Categories(raw) => raw,
            ChecklistDocument::Exported { results } => results,
        };

        raw.into_iter().map(Category::try_from).collect()
    }
}

#[async_trait]
impl AnalysisProvider for FileProvider {
    async fn analyze(&self, target: &str, _credential: &str) -> Result<Vec<Category>> {
        info!(
            "Loading checklist for {} from {}",
            target,
            self.path.display()
        );

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QaError::Connection(format!("Cannot read {}: {}", self.path.display(), e))
        })?;

        let categories = Self::parse(&content)?;
        debug!("Loaded {} categories", categories.len());
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckStatus;
    use std::io::Write;

    const CATEGORIES_JSON: &str = r#"[
        {
            "category": "Typography",
            "checks": [
                {"title": "Font Family", "description": "Fonts", "status": "pass"},
                {"title": "Line Height", "description": "Spacing", "status": "warning", "details": "1.4"}
            ]
        }
    ]"#;

    #[test]
    fn test_parse_bare_categories() {
        let categories = FileProvider::parse(CATEGORIES_JSON).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].checks[1].status, CheckStatus::Warning);
        assert_eq!(categories[0].checks[1].details.as_deref(), Some("1.4"));
    }

    #[test]
    fn test_parse_exported_report() {
        let json = r#"{
            "url": "https://preview.example.com",
            "timestamp": "2025-01-01T00:00:00.000Z",
            "overallStatus": "PASS",
            "summary": {"total": 1, "passed": 1, "failed": 0, "warnings": 0},
            "results": [
                {"category": "Imagery", "checks": [
                    {"title": "Alt Text", "description": "Alt", "status": "pass"}
                ]}
            ]
        }"#;

        let categories = FileProvider::parse(json).unwrap();
        assert_eq!(categories[0].category, "Imagery");
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = r#"[{"category": "Copy", "checks": [
            {"title": "Oxford Comma", "description": "", "status": "maybe"}
        ]}]"#;

        assert!(matches!(
            FileProvider::parse(json),
            Err(QaError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            FileProvider::parse("{not json"),
            Err(QaError::Analysis(_))
        ));
    }

    #[tokio::test]
    async fn test_analyze_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATEGORIES_JSON.as_bytes()).unwrap();

        let provider = FileProvider::new(file.path());
        let categories = provider.analyze("https://a.example", "k").await.unwrap();

        assert_eq!(categories[0].checks.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path().join("absent.json"));

        let result = provider.analyze("https://a.example", "k").await;
        assert!(matches!(result, Err(QaError::Connection(_))));
    }
}
