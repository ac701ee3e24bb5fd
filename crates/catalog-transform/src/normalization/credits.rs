//! Cast list counting.

/// Count the credited cast members in a comma-separated list.
///
/// Segments that are empty after trimming are not counted; a null list
/// counts as zero.
///
/// # Examples
///
/// ```
/// use catalog_transform::normalization::count_cast_members;
///
/// assert_eq!(count_cast_members(Some("Tom Hanks, , Meg Ryan")), 2);
/// assert_eq!(count_cast_members(None), 0);
/// ```
pub fn count_cast_members(value: Option<&str>) -> u32 {
    let Some(list) = value else {
        return 0;
    };
    list.split(',')
        .filter(|member| !member.trim().is_empty())
        .count() as u32
}
