//! Runtime parsing for catalog `duration` values.
//!
//! Movies carry a runtime in minutes (`90 min`), shows a season count
//! (`3 Seasons`). The parsed form is a count plus a unit.

use std::fmt;

use serde::Serialize;

/// Unit of a parsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Seasons,
    /// Neither minutes nor seasons.
    Units,
}

impl DurationUnit {
    /// Lower-case label written to the `duration_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seasons => "seasons",
            Self::Units => "units",
        }
    }

    /// Classify the unit of a lower-cased duration text.
    fn classify(lower: &str) -> Self {
        if lower.contains("min") {
            Self::Minutes
        } else if lower.contains("season") {
            Self::Seasons
        } else {
            Self::Units
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duration split into its count and unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    /// `None` when the text holds no digits or the number overflows.
    pub count: Option<i64>,
    pub unit: DurationUnit,
}

/// Parse a duration value.
///
/// Returns `None` for a null or empty value, so the count and the unit are
/// missing together. Otherwise the unit is always present and the count is
/// every ASCII digit of the text read as one number (`"1h 30min"` is 130).
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::{DurationUnit, parse_duration};
///
/// let parsed = parse_duration(Some("3 Seasons")).unwrap();
/// assert_eq!(parsed.count, Some(3));
/// assert_eq!(parsed.unit, DurationUnit::Seasons);
/// assert_eq!(parse_duration(Some("")), None);
/// ```
pub fn parse_duration(value: Option<&str>) -> Option<ParsedDuration> {
    let raw = value?;
    if raw.is_empty() {
        return None;
    }

    let lower = raw.to_lowercase();
    Some(ParsedDuration {
        count: joined_digits(&lower).parse::<i64>().ok(),
        unit: DurationUnit::classify(&lower),
    })
}

fn joined_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
