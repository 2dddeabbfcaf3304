//! Leap-year rule and nearest-leap-year search.

/// Returns true if `year` is a leap year in the proleptic Gregorian
/// calendar: divisible by 4 but not by 100, or divisible by 400.
///
/// # Example
///
/// ```
/// use quill_calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Finds the leap year closest to `year`, counting `year` itself.
///
/// A leap `year` is its own nearest leap year. Otherwise two scans run
/// independently: forward toward the future, and backward toward year 1.
/// The backward candidate is disqualified if the scan reaches year 0
/// without finding a leap year above it, in which case the forward
/// candidate wins unconditionally. When both candidates are equidistant
/// the forward one wins.
///
/// # Panics
///
/// Panics if `year` is above `i32::MAX - 8`; the forward scan needs
/// headroom of one leap-year gap, and past that point the nearest leap
/// year may not be representable at all. Years parsed from input text
/// are capped at 9999 and stay far below the bound.
///
/// # Example
///
/// ```
/// use quill_calendar::nearest_leap_year;
///
/// assert_eq!(nearest_leap_year(2024), 2024);
/// assert_eq!(nearest_leap_year(2023), 2024);
/// assert_eq!(nearest_leap_year(2021), 2020);
/// assert_eq!(nearest_leap_year(2026), 2028); // tie, future wins
/// ```
pub fn nearest_leap_year(year: i32) -> i32 {
    // Consecutive leap years are at most eight apart (1896 to 1904), so
    // the forward scan stays in range below this bound.
    assert!(
        year <= i32::MAX - 8,
        "nearest_leap_year: year {year} out of range"
    );

    if is_leap_year(year) {
        return year;
    }

    let mut next = year;
    while !is_leap_year(next) {
        next += 1;
    }

    let mut prev = year;
    while !is_leap_year(prev) && prev > 0 {
        prev -= 1;
    }
    if prev <= 0 {
        return next;
    }

    if next - year <= year - prev {
        next
    } else {
        prev
    }
}
