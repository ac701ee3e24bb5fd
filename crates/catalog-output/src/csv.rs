//! CSV serialization.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write a table to `path` as CSV with a header row and no index column.
///
/// Nulls are written as empty fields and `Date` columns as `YYYY-MM-DD`.
/// An existing file is replaced.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|source| OutputError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| OutputError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    writer.flush().map_err(|e| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV table"
    );
    Ok(())
}
