//! # quill-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["date line text"] -->|"parse_date()"| B["Date"]
//!     B -->|".day_of_year()"| C["ordinal day"]
//!     B -->|"days_between()"| D["signed day count"]
//!     E["year"] -->|"nearest_leap_year()"| F["leap year"]
//!     A -->|"days_to_nearest_leap_year()"| G["absolute day count"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use quill_calendar::{Date, days_between, days_to_nearest_leap_year, is_leap_year};
//!
//! // Leap rule and date construction
//! assert!(is_leap_year(2024));
//! let a = Date::new(2023, 3, 15).unwrap();
//! let b = Date::new(2024, 3, 15).unwrap();
//!
//! // Signed day distance, leap days included
//! assert_eq!(days_between(a, b), 366);
//!
//! // Distance from a date line to the nearest leap year
//! assert_eq!(days_to_nearest_leap_year("15 Mar 2023").unwrap(), 292);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Leap-year rule and nearest-leap-year search |
//! | `month` | Month tables and abbreviation lookup |
//! | `date` | Validated Gregorian date |
//! | `parse` | `<day> <month> <year>` line parsing |
//! | `distance` | Day distances between dates and to leap years |
//! | `error` | Error types |

mod date;
mod distance;
mod error;
mod leap;
mod month;
mod parse;

pub use date::Date;
pub use distance::{days_between, days_to_nearest_leap_year, year_length};
pub use error::CalendarError;
pub use leap::{is_leap_year, nearest_leap_year};
pub use month::{MONTH_ABBREVS, days_in_month, month_from_abbrev};
pub use parse::{MAX_YEAR, parse_date};
