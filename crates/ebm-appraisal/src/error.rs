//! Error types for the appraisal engine and its CLI adapter.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

use std::path::PathBuf;

/// Errors from the classification and appraisal engine.
///
/// Per the propagation policy, an engine error is fatal to the affected
/// citation only; batch processing continues and the failed entry is
/// carried into the report marked distinctly.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Study-design category has no supported checklist.
    #[error("unsupported study-design category: {category:?} (expected one of rct, systematic-review, cohort, case-control)")]
    InvalidCategory {
        /// The rejected category string.
        category: String,
    },

    /// Citation's evidence level has no checklist and no explicit
    /// category was supplied.
    #[error("no checklist applies to {level}; supply an explicit category to score this citation")]
    Unscoreable {
        /// The level that cannot be scored.
        level: crate::models::EvidenceLevel,
    },
}

impl EngineError {
    /// Create an invalid-category error.
    #[must_use]
    pub fn invalid_category(category: impl Into<String>) -> Self {
        Self::InvalidCategory { category: category.into() }
    }
}

/// Errors from the CLI adapter's file handling.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Input file was not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A level-range argument such as "1-2" was malformed.
    #[error("invalid level range {input:?}: expected MIN-MAX with levels between 1 and 6")]
    InvalidLevelRange {
        /// The rejected argument.
        input: String,
    },

    /// Error propagated from the engine.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    /// Create a read error.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    /// Create a write error.
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse { path: path.into(), source }
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_message() {
        let err = EngineError::invalid_category("cross-sectional");
        let msg = err.to_string();
        assert!(msg.contains("cross-sectional"));
        assert!(msg.contains("case-control"));
    }

    #[test]
    fn test_cli_error_wraps_engine_error() {
        let err: CliError = EngineError::invalid_category("x").into();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
