//! Error types for the fallible outer surfaces of the analyzer.
//!
//! The analysis itself never fails; these errors come from loading
//! configuration, reference tables and datasets, or parsing type codes.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for persona-mbti.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {field} - {message}")]
    InvalidConfig { field: String, message: String },

    #[error("invalid reference dictionary: {0}")]
    InvalidDictionary(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("unknown personality type code: {0:?}")]
    UnknownType(String),
}

impl AnalyzerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        AnalyzerError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = AnalyzerError::invalid_config("resolution.max_deviation", "must be positive");
        let msg = err.to_string();
        assert!(msg.contains("resolution.max_deviation"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = AnalyzerError::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_unknown_type_display() {
        let err = AnalyzerError::UnknownType("XXXX".to_string());
        assert!(err.to_string().contains("XXXX"));
    }
}
