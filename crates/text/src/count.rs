//! Overlapping substring counting.

/// Counts the positions at which `needle` occurs in `haystack` as a
/// contiguous byte sequence. Overlapping occurrences count separately,
/// so `"aa"` occurs twice in `"aaa"`.
///
/// The function is total: an empty needle, an empty haystack, or a
/// needle longer than the haystack all yield 0.
///
/// # Example
///
/// ```
/// use quill_text::count_occurrences;
///
/// assert_eq!(count_occurrences("ana", "banana banana\n"), 4);
/// assert_eq!(count_occurrences("", "banana"), 0);
/// ```
pub fn count_occurrences(needle: &str, haystack: &str) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .filter(|window| *window == needle.as_bytes())
        .count()
}
