//! Error types for catalog output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the cleaned table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed while serializing the table.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::CsvWrite {
            path: PathBuf::from("processed/netflix_cleaned.csv"),
            message: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write CSV processed/netflix_cleaned.csv: disk full"
        );
    }
}
