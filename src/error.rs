//! Custom error types for Rekap
//!
//! Malformed amounts are never errors (they count as zero). What remains
//! are configuration, file and lookup failures.

use thiserror::Error;

/// The main error type for Rekap operations
#[derive(Error, Debug)]
pub enum RekapError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML seed file errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl RekapError {
    /// Create a "not found" error for a daily ledger date
    pub fn date_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Date",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an expense category
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a summary row
    pub fn row_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Row",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RekapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RekapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RekapError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for RekapError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Rekap operations
pub type RekapResult<T> = Result<T, RekapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RekapError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = RekapError::category_not_found("Makan");
        assert_eq!(err.to_string(), "Category not found: Makan");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RekapError = io_err.into();
        assert!(matches!(err, RekapError::Io(_)));
    }
}
