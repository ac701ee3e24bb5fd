//! Per-value normalization rules.
//!
//! Every function here is pure and works on a single value. Frame-level
//! application lives in [`crate::executors`].

pub mod credits;
pub mod datetime;
pub mod duration;
pub mod header;
pub mod rating;

pub use credits::count_cast_members;
pub use datetime::{date_parts, parse_catalog_date};
pub use duration::{DurationUnit, ParsedDuration, parse_duration};
pub use header::{canonical_column_name, canonical_column_names};
pub use rating::{UNKNOWN_RATING, normalize_rating};
