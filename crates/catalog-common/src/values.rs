//! Polars `AnyValue` utility functions.
//!
//! Helpers for rendering cells as text and coercing them to whole numbers.
//! Nulls are never rendered as text, so "missing" stays distinct from
//! "empty".

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to text, keeping `Null` as `None`.
///
/// Floats are formatted without unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use catalog_common::any_to_optional_string;
///
/// assert_eq!(any_to_optional_string(AnyValue::Null), None);
/// assert_eq!(any_to_optional_string(AnyValue::Int32(42)).as_deref(), Some("42"));
/// assert_eq!(any_to_optional_string(AnyValue::String("hello")).as_deref(), Some("hello"));
/// ```
pub fn any_to_optional_string(value: AnyValue<'_>) -> Option<String> {
    let rendered = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => {
            let s = other.to_string();
            // Display wraps some logical types in quotes
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    };
    Some(rendered)
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Only trims trailing zeros if the number contains a decimal point.
///
/// # Examples
///
/// ```
/// use catalog_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(2019.0), "2019");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Converts an `AnyValue` to a whole `i64`.
///
/// Integers pass through (unsigned values that overflow `i64` do not). Floats
/// are accepted only when finite and without a fractional part. Strings go
/// through [`parse_whole_i64`]. Everything else is `None`.
pub fn any_to_whole_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => whole_f64(f64::from(v)),
        AnyValue::Float64(v) => whole_f64(v),
        AnyValue::String(s) => parse_whole_i64(s),
        AnyValue::StringOwned(s) => parse_whole_i64(&s),
        _ => None,
    }
}

/// Parses text as a whole number.
///
/// Accepts plain integers (`"2019"`) and float spellings of whole numbers
/// (`"2019.0"`, `"2.019e3"`). Surrounding whitespace is ignored.
pub fn parse_whole_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    trimmed.parse::<f64>().ok().and_then(whole_f64)
}

/// 2^63, exactly representable as `f64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn whole_f64(v: f64) -> Option<i64> {
    if v.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&v) {
        Some(v as i64)
    } else {
        None
    }
}
