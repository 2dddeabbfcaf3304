//! Error types for the quill-calendar crate.

/// Error type for all fallible operations in the quill-calendar crate.
///
/// Variants fall into two classes: text that does not have the
/// `<day> <month> <year>` token shape ([`InvalidFormat`]), and well-formed
/// tokens that name a calendar date which does not exist (everything else).
///
/// [`InvalidFormat`]: CalendarError::InvalidFormat
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date line does not yield the three expected tokens.
    #[error("invalid date format: {input:?}")]
    InvalidFormat {
        /// The text that could not be tokenized.
        input: String,
    },

    /// Returned when a day number is outside the envelope 1..=31.
    #[error("invalid day: {day} (must be 1..=31)")]
    DayOutOfRange {
        /// The invalid day value that was provided.
        day: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a three-letter month token is not a known abbreviation.
    #[error("unknown month abbreviation: {token:?}")]
    UnknownMonth {
        /// The unrecognized month token.
        token: String,
    },

    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    YearOutOfRange {
        /// The invalid year value that was provided.
        year: i64,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_format() {
        let err = CalendarError::InvalidFormat {
            input: "not a date".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date format: \"not a date\"");
    }

    #[test]
    fn error_day_out_of_range() {
        let err = CalendarError::DayOutOfRange { day: 32 };
        assert_eq!(err.to_string(), "invalid day: 32 (must be 1..=31)");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_unknown_month() {
        let err = CalendarError::UnknownMonth {
            token: "Xyz".to_string(),
        };
        assert_eq!(err.to_string(), "unknown month abbreviation: \"Xyz\"");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange { year: 0 };
        assert_eq!(err.to_string(), "invalid year: 0 (must be 1..=9999)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::DayOutOfRange { day: 0 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
