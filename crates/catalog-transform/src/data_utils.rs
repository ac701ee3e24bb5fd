//! Data access utilities for cleaning rules.
//!
//! Helpers for testing column presence and reading a column as text
//! regardless of its inferred type.

use catalog_common::any_to_optional_string;
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::error::{Result, TransformError};

/// Returns true if the table currently has a column with this exact name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Look up a column, mapping absence to [`TransformError::ColumnNotFound`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Read every cell of a column as text, keeping nulls as `None`.
///
/// String columns are read directly; other types go through their text
/// rendering (`90`, `2019.5`, `true`).
pub fn column_text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    if let Ok(ca) = column.str() {
        return Ok(ca.iter().map(|value| value.map(str::to_string)).collect());
    }
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_optional_string(
            column.get(idx).unwrap_or(AnyValue::Null),
        ));
    }
    Ok(values)
}

/// Names of all columns, in order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
