//! Error types for the cleaning pipeline.

use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Result type for pipeline operations
pub type CleanResult<T> = Result<T, CleanError>;

/// A raw field value that does not match its expected mini-format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid ISO date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("missing birth date")]
    MissingDate,

    #[error("invalid height '{0}', expected '<feet>-<inches>'")]
    InvalidHeight(String),

    #[error("invalid age '{0}', expected '<years>' or '<years>-<days>'")]
    InvalidAge(String),
}

/// Error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("Parse error in column '{column}' at row {row}: {source}")]
    Parse {
        column: String,
        row: usize,
        #[source]
        source: ConvertError,
    },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing_column(column: &str) -> Self {
        CleanError::Schema(format!("missing required column '{}'", column))
    }
}
