//! Validated Gregorian calendar date.

use crate::error::CalendarError;
use crate::leap::is_leap_year;
use crate::month::{MONTH_START_DOY, days_in_month};

/// A date in the proleptic Gregorian calendar.
///
/// Month and day are validated on construction, so a `Date` never names
/// February 30. The year is carried as-is: range policy for input text
/// lives in the parsing layer, and year arithmetic stays usable past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if the month is outside
    /// 1..=12, or [`CalendarError::InvalidDay`] if the day is outside the
    /// month's length for that year (February 29 exists only in leap
    /// years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates the January 1 date of `year`.
    ///
    /// This constructor is infallible because day 1 of month 1 exists in
    /// every year.
    pub fn jan1(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the ordinal day within this date's own year.
    ///
    /// January 1 is day 1; December 31 is day 365, or 366 in a leap year.
    pub fn day_of_year(self) -> u16 {
        let mut doy = MONTH_START_DOY[self.month as usize] + u16::from(self.day) - 1;
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }
}
