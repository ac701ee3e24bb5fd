//! Content rating normalization.

/// Sentinel for ratings that are absent.
pub const UNKNOWN_RATING: &str = "Unknown";

/// Normalize a rating value.
///
/// Only a null and the exact text `nan` are treated as absent; other markers
/// such as `NaN` or `N/A` are kept as they are.
pub fn normalize_rating(value: Option<&str>) -> &str {
    match value {
        None | Some("nan") => UNKNOWN_RATING,
        Some(rating) => rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rating() {
        assert_eq!(normalize_rating(None), "Unknown");
        assert_eq!(normalize_rating(Some("nan")), "Unknown");
    }

    #[test]
    fn test_rating_kept() {
        assert_eq!(normalize_rating(Some("TV-MA")), "TV-MA");
        assert_eq!(normalize_rating(Some("PG-13")), "PG-13");
    }

    #[test]
    fn test_other_markers_kept() {
        assert_eq!(normalize_rating(Some("NaN")), "NaN");
        assert_eq!(normalize_rating(Some("NULL")), "NULL");
        assert_eq!(normalize_rating(Some("N/A")), "N/A");
        assert_eq!(normalize_rating(Some("")), "");
    }
}
