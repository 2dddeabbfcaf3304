//! Month tables and lookups.
//!
//! Tables are indexed by month number, so index 0 is unused padding and
//! January is index 1. February entries are common-year values; leap
//! adjustment happens in [`days_in_month`] and in day-of-year math.

use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// Days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Case-sensitive three-letter month abbreviations, January first.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the number of days in the given month of the given year,
/// with February adjusted for leap years.
///
/// # Panics
///
/// Panics if `month` is not in 1..=12. Callers validate the month number
/// before asking for its length.
pub fn days_in_month(month: u8, year: i32) -> u8 {
    assert!(
        (1..=12).contains(&month),
        "days_in_month: month {month} out of range"
    );
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Resolves a three-letter month abbreviation to its month number (1..=12).
///
/// Matching is case-sensitive: `"Feb"` resolves, `"feb"` and `"FEB"` do not.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownMonth`] if `token` is not one of the
/// twelve abbreviations in [`MONTH_ABBREVS`].
pub fn month_from_abbrev(token: &str) -> Result<u8, CalendarError> {
    MONTH_ABBREVS
        .iter()
        .position(|&abbrev| abbrev == token)
        .map(|idx| (idx + 1) as u8)
        .ok_or_else(|| CalendarError::UnknownMonth {
            token: token.to_string(),
        })
}
