//! Date parsing for catalog `date_added` values.
//!
//! Catalog exports carry dates in a handful of human and machine formats
//! (`September 9, 2021`, `9/25/2021`, `2021-09-25`). Anything that does not
//! match one of them is treated as missing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order. Slash dates are month-first.
const DATE_FORMATS: [&str; 10] = [
    "%Y-%m-%d",
    "%B %d, %Y", // September 9, 2021 (also accepts Sep)
    "%B %d %Y",  // September 9 2021
    "%d %B %Y",  // 9 September 2021
    "%d-%b-%Y",  // 09-Sep-2021
    "%m/%d/%Y",  // 9/25/2021
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%Y%m%d",
];

/// Date-time formats whose date component is kept.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

/// Parse a catalog date value.
///
/// Surrounding whitespace is ignored. Returns `None` for empty or
/// unrecognized input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use catalog_transform::normalization::parse_catalog_date;
///
/// assert_eq!(
///     parse_catalog_date("September 9, 2021"),
///     NaiveDate::from_ymd_opt(2021, 9, 9)
/// );
/// assert_eq!(parse_catalog_date("not a date"), None);
/// ```
pub fn parse_catalog_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Calendar year and month of a date.
pub fn date_parts(date: NaiveDate) -> (i32, i32) {
    // month() is 1..=12
    (date.year(), date.month() as i32)
}
