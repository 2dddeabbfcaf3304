//! Parsing of `<day> <month> <year>` date lines.

use crate::date::Date;
use crate::error::CalendarError;
use crate::month::month_from_abbrev;

/// Largest year accepted from input text.
pub const MAX_YEAR: i64 = 9999;

/// Parses a date from the first three whitespace-separated tokens of
/// `text`, in `<day> <month-abbrev> <year>` order, e.g. `"29 Feb 2024"`.
///
/// Tokens may be separated by any run of whitespace, newlines included,
/// and anything after the third token is ignored. The month token must be
/// one of the case-sensitive three-letter abbreviations `Jan` through
/// `Dec`.
///
/// # Errors
///
/// - [`CalendarError::InvalidFormat`] if fewer than three tokens are
///   present, or the day or year token is not an integer.
/// - [`CalendarError::DayOutOfRange`] if the day is outside 1..=31.
/// - [`CalendarError::YearOutOfRange`] if the year is outside
///   1..=[`MAX_YEAR`].
/// - [`CalendarError::UnknownMonth`] if the month token is not a known
///   abbreviation, whatever its length. A well-shaped line with a bad
///   month is a date error, not a format error.
/// - [`CalendarError::InvalidDay`] if the day exceeds the month's length
///   for that year.
pub fn parse_date(text: &str) -> Result<Date, CalendarError> {
    let mut tokens = text.split_whitespace();
    let (Some(day_token), Some(month_token), Some(year_token)) =
        (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(invalid_format(text));
    };

    let day: i64 = day_token.parse().map_err(|_| invalid_format(text))?;
    let year: i64 = year_token.parse().map_err(|_| invalid_format(text))?;

    if !(1..=31).contains(&day) {
        return Err(CalendarError::DayOutOfRange { day });
    }
    if !(1..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    let month = month_from_abbrev(month_token)?;

    Date::new(year as i32, month, day as u8)
}

fn invalid_format(text: &str) -> CalendarError {
    CalendarError::InvalidFormat {
        input: text.trim().to_string(),
    }
}
