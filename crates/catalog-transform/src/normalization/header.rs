//! Column header canonicalization.

use std::collections::HashSet;

/// Canonical form of a column header.
///
/// Strips a UTF-8 byte-order mark, trims surrounding whitespace, lower-cases,
/// and replaces internal spaces with underscores.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::canonical_column_name;
///
/// assert_eq!(canonical_column_name(" Show ID "), "show_id");
/// assert_eq!(canonical_column_name("show_id"), "show_id");
/// ```
pub fn canonical_column_name(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Canonicalize a full header row, keeping names unique.
///
/// When two headers collapse to the same canonical name, every later one gets
/// a `_duplicated_<n>` suffix, the same convention Polars uses for repeated
/// CSV headers.
pub fn canonical_column_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());
    for header in raw {
        let base = canonical_column_name(header.as_ref());
        let mut name = base.clone();
        let mut n = 0usize;
        while seen.contains(&name) {
            name = format!("{base}_duplicated_{n}");
            n += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}
