//! Error types for the QA workflow.
//!
//! Every variant is terminal for the request that raised it. The session
//! discards any partial state before surfacing one of these.

use thiserror::Error;

/// Result type alias using [`QaError`].
pub type Result<T> = std::result::Result<T, QaError>;

/// Errors raised by providers, validation and export.
#[derive(Debug, Error)]
pub enum QaError {
    /// Target unreachable or credential rejected.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Target was reached but could not be evaluated.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A check carried a status outside `pass`, `fail`, `warning`.
    #[error("Invalid status '{value}' for check '{check}' in category '{category}'")]
    InvalidData {
        category: String,
        check: String,
        value: String,
    },

    /// A required input was empty.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// Report could not be serialized or parsed.
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for QaError {
    fn from(e: serde_json::Error) -> Self {
        QaError::Export(e.to_string())
    }
}
