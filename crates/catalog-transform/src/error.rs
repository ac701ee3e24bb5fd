//! Error types for catalog cleaning.

use thiserror::Error;

/// Errors raised while applying cleaning rules.
///
/// Dirty cell values never produce an error; they become nulls. Only
/// structural problems surface here.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
