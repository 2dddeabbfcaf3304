//! Day distances between dates and to the nearest leap year.

use crate::date::Date;
use crate::error::CalendarError;
use crate::leap::{is_leap_year, nearest_leap_year};
use crate::parse::parse_date;

/// Number of days in `year`: 365, or 366 for leap years.
pub fn year_length(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Signed day count from `a` to `b`, positive when `b` is later.
///
/// The lengths of the whole calendar years between the two endpoints are
/// summed first, then each endpoint's day-of-year adjusts within its own
/// year, so every February 29 along the way is counted. The result agrees
/// with rata-die subtraction for all valid dates; in particular
/// `days_between(d, d) == 0` and
/// `days_between(a, b) == -days_between(b, a)`.
pub fn days_between(a: Date, b: Date) -> i64 {
    let mut days: i64 = 0;
    let mut year = a.year();
    while year < b.year() {
        days += i64::from(year_length(year));
        year += 1;
    }
    while year > b.year() {
        year -= 1;
        days -= i64::from(year_length(year));
    }
    days + i64::from(b.day_of_year()) - i64::from(a.day_of_year())
}

/// Parses `text` as a `<day> <month> <year>` date line and returns the
/// absolute day distance to the nearest leap year.
///
/// A date already inside a leap year is at distance 0, whatever its month
/// and day. Otherwise the distance runs to January 1 of the nearest leap
/// year, with equidistant ties resolved toward the future (see
/// [`nearest_leap_year`]).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidFormat`] if the three tokens cannot be
/// extracted, or one of the date-validity errors if the tokens name a
/// date that does not exist (see [`parse_date`]).
pub fn days_to_nearest_leap_year(text: &str) -> Result<u64, CalendarError> {
    let date = parse_date(text)?;
    if is_leap_year(date.year()) {
        return Ok(0);
    }
    let target = Date::jan1(nearest_leap_year(date.year()));
    Ok(days_between(date, target).unsigned_abs())
}
