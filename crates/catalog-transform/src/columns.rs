//! Canonical column names used by the cleaning rules.

pub const SHOW_ID: &str = "show_id";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";
pub const RELEASE_YEAR: &str = "release_year";
pub const DATE_ADDED: &str = "date_added";
pub const DATE_ADDED_PARSED: &str = "date_added_parsed";
pub const YEAR_ADDED: &str = "year_added";
pub const MONTH_ADDED: &str = "month_added";
pub const RATING: &str = "rating";
pub const DURATION: &str = "duration";
pub const DURATION_INT: &str = "duration_int";
pub const DURATION_TYPE: &str = "duration_type";
pub const CAST: &str = "cast";
pub const CAST_COUNT: &str = "cast_count";
pub const COUNTRY: &str = "country";
pub const DIRECTOR: &str = "director";
pub const LISTED_IN: &str = "listed_in";
pub const DESCRIPTION: &str = "description";

/// Output column order. Columns not listed keep their relative order after these.
pub const PREFERRED_ORDER: [&str; 17] = [
    SHOW_ID,
    TITLE,
    TYPE,
    RELEASE_YEAR,
    DATE_ADDED_PARSED,
    YEAR_ADDED,
    MONTH_ADDED,
    RATING,
    DURATION,
    DURATION_INT,
    DURATION_TYPE,
    CAST,
    CAST_COUNT,
    COUNTRY,
    DIRECTOR,
    LISTED_IN,
    DESCRIPTION,
];
