//! Cleaning executor functions.
//!
//! Each function applies one cleaning rule to a `DataFrame` in place and
//! returns how many columns, rows or cells it changed. Functions that work
//! on a named column return [`TransformError::ColumnNotFound`] when it is
//! absent; the pipeline checks presence first and skips instead.
//!
//! [`TransformError::ColumnNotFound`]: crate::TransformError::ColumnNotFound

use catalog_common::any_to_whole_i64;
use polars::prelude::*;
use tracing::{debug, warn};

use crate::columns::{
    CAST, CAST_COUNT, DATE_ADDED, DATE_ADDED_PARSED, DURATION, DURATION_INT, DURATION_TYPE,
    MONTH_ADDED, PREFERRED_ORDER, RATING, RELEASE_YEAR, TITLE, YEAR_ADDED,
};
use crate::data_utils::{column_names, column_text_values, require_column};
use crate::error::Result;
use crate::normalization::{
    canonical_column_names, count_cast_members, date_parts, normalize_rating, parse_catalog_date,
    parse_duration,
};

/// Canonicalize every column header.
///
/// Returns the number of headers whose name changed.
pub fn normalize_column_names(df: &mut DataFrame) -> Result<usize> {
    let original = column_names(df);
    let canonical = canonical_column_names(&original);

    let renamed = original
        .iter()
        .zip(&canonical)
        .filter(|(before, after)| before != after)
        .count();
    if renamed == 0 {
        return Ok(0);
    }

    for (before, after) in original.iter().zip(&canonical) {
        if after.contains("_duplicated_") && !before.contains("_duplicated_") {
            warn!(header = %before, renamed_to = %after, "header collides after normalization");
        }
    }

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .zip(&canonical)
        .map(|(column, name)| column.clone().with_name(name.as_str().into()))
        .collect();
    *df = DataFrame::new(columns)?;

    Ok(renamed)
}

/// Trim surrounding whitespace from every value of every text column.
///
/// Numeric and boolean columns are left untouched and nulls stay null.
/// Returns the number of cells that changed.
pub fn trim_text_columns(df: &mut DataFrame) -> Result<usize> {
    let text_columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .collect();
    if text_columns.is_empty() {
        return Ok(0);
    }

    let exprs: Vec<Expr> = text_columns
        .iter()
        .map(|name| col(name.as_str()).str().strip_chars(lit(NULL)))
        .collect();
    let trimmed = df.clone().lazy().with_columns(exprs).collect()?;

    let mut total = 0;
    for name in &text_columns {
        let before = df.column(name)?.str()?;
        let after = trimmed.column(name)?.str()?;
        let changed = before
            .iter()
            .zip(after.iter())
            .filter(|(old, new)| old != new)
            .count();
        if changed > 0 {
            debug!(column = %name, changed, "trimmed text column");
            total += changed;
        }
    }

    if total > 0 {
        *df = trimmed;
    }
    Ok(total)
}

/// Drop rows that are identical across every column, keeping the first.
///
/// Nulls compare equal to nulls and distinct from empty strings. Returns the
/// number of rows removed.
pub fn drop_duplicate_rows(df: &mut DataFrame) -> Result<usize> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(0);
    }

    let before = df.height();
    let unique = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    let removed = before - unique.height();
    if removed > 0 {
        *df = unique;
    }
    Ok(removed)
}

/// Drop rows whose title is null or blank.
///
/// Returns the number of rows removed.
pub fn drop_missing_titles(df: &mut DataFrame) -> Result<usize> {
    let keep: Vec<bool> = column_text_values(df, TITLE)?
        .iter()
        .map(|title| title.as_deref().is_some_and(|t| !t.trim().is_empty()))
        .collect();

    filter_rows(df, &keep, "title_present")
}

/// Parse `date_added` into `date_added_parsed`, `year_added` and `month_added`.
///
/// Values that cannot be parsed become null in all three derived columns.
/// Returns the number of non-null values that failed to parse.
pub fn derive_date_added(df: &mut DataFrame) -> Result<usize> {
    let values = column_text_values(df, DATE_ADDED)?;

    let mut unparsed = 0usize;
    let mut dates = Vec::with_capacity(values.len());
    let mut years = Vec::with_capacity(values.len());
    let mut months = Vec::with_capacity(values.len());
    for value in &values {
        let parsed = value.as_deref().and_then(parse_catalog_date);
        if value.is_some() && parsed.is_none() {
            unparsed += 1;
        }
        let parts = parsed.map(date_parts);
        dates.push(parsed);
        years.push(parts.map(|(year, _)| year));
        months.push(parts.map(|(_, month)| month));
    }

    df.with_column(Series::new(DATE_ADDED_PARSED.into(), dates))?;
    df.with_column(Series::new(YEAR_ADDED.into(), years))?;
    df.with_column(Series::new(MONTH_ADDED.into(), months))?;

    if unparsed > 0 {
        debug!(unparsed, "date_added values could not be parsed");
    }
    Ok(unparsed)
}

/// Split `duration` into `duration_int` and `duration_type`.
///
/// Null or empty durations leave both derived cells null. Returns the number
/// of non-empty durations without a usable count.
pub fn derive_duration(df: &mut DataFrame) -> Result<usize> {
    let values = column_text_values(df, DURATION)?;

    let mut without_count = 0usize;
    let mut counts: Vec<Option<i64>> = Vec::with_capacity(values.len());
    let mut units: Vec<Option<&str>> = Vec::with_capacity(values.len());
    for value in &values {
        match parse_duration(value.as_deref()) {
            Some(parsed) => {
                if parsed.count.is_none() {
                    without_count += 1;
                }
                counts.push(parsed.count);
                units.push(Some(parsed.unit.as_str()));
            }
            None => {
                counts.push(None);
                units.push(None);
            }
        }
    }

    df.with_column(Series::new(DURATION_INT.into(), counts))?;
    df.with_column(Series::new(DURATION_TYPE.into(), units))?;

    if without_count > 0 {
        debug!(without_count, "duration values without a numeric count");
    }
    Ok(without_count)
}

/// Derive `cast_count` from the comma-separated `cast` list.
///
/// Returns the number of rows with at least one credited cast member.
pub fn derive_cast_count(df: &mut DataFrame) -> Result<usize> {
    let counts: Vec<u32> = column_text_values(df, CAST)?
        .iter()
        .map(|cast| count_cast_members(cast.as_deref()))
        .collect();
    let credited = counts.iter().filter(|count| **count > 0).count();

    df.with_column(Series::new(CAST_COUNT.into(), counts))?;
    Ok(credited)
}

/// Replace null and `nan` ratings with `Unknown`.
///
/// Returns the number of cells replaced. The column is only rewritten when
/// something was replaced.
pub fn fill_missing_ratings(df: &mut DataFrame) -> Result<usize> {
    let values = column_text_values(df, RATING)?;

    let mut replaced = 0usize;
    let ratings: Vec<String> = values
        .iter()
        .map(|value| {
            let normalized = normalize_rating(value.as_deref());
            if value.as_deref() != Some(normalized) {
                replaced += 1;
            }
            normalized.to_string()
        })
        .collect();

    if replaced > 0 {
        df.with_column(Series::new(RATING.into(), ratings))?;
    }
    Ok(replaced)
}

/// Coerce `release_year` to a nullable 64-bit integer column.
///
/// Returns the number of non-null values that could not be coerced and were
/// replaced by null.
pub fn coerce_release_year(df: &mut DataFrame) -> Result<usize> {
    let column = require_column(df, RELEASE_YEAR)?;

    let mut invalid = 0usize;
    let mut years: Vec<Option<i64>> = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        let was_present = !value.is_null();
        let year = any_to_whole_i64(value);
        if was_present && year.is_none() {
            invalid += 1;
        }
        years.push(year);
    }

    df.with_column(Series::new(RELEASE_YEAR.into(), years))?;

    if invalid > 0 {
        debug!(invalid, "release_year values could not be coerced to integers");
    }
    Ok(invalid)
}

/// Reorder columns into the preferred catalog order.
///
/// Preferred columns that are present come first, then every other column in
/// its current order. Returns the number of columns whose position changed.
pub fn reorder_columns(df: &mut DataFrame) -> Result<usize> {
    let current = column_names(df);
    let mut order: Vec<&str> = PREFERRED_ORDER
        .iter()
        .copied()
        .filter(|name| current.iter().any(|c| c.as_str() == *name))
        .collect();
    order.extend(
        current
            .iter()
            .map(String::as_str)
            .filter(|name| !PREFERRED_ORDER.contains(name)),
    );

    let moved = current
        .iter()
        .zip(&order)
        .filter(|(before, after)| before.as_str() != **after)
        .count();
    if moved > 0 {
        *df = df.select(order)?;
    }
    Ok(moved)
}

/// Keep only rows whose mask entry is true. Returns the number removed.
fn filter_rows(df: &mut DataFrame, keep: &[bool], mask_name: &str) -> Result<usize> {
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        let mask = BooleanChunked::from_slice(mask_name.into(), keep);
        *df = df.filter(&mask)?;
    }
    Ok(removed)
}
