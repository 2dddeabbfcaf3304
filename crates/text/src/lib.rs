//! # quill-text
//!
//! Bounded text storage and pure text transforms.
//!
//! ## Quick Start
//!
//! ```
//! use quill_text::{TextBuffer, collapse_spaces, count_occurrences, strip_digits};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.push_str("room  101   and  202\n").unwrap();
//!
//! collapse_spaces(&mut buffer).unwrap();
//! assert_eq!(buffer.as_str(), "room 101 and 202\n");
//!
//! strip_digits(&mut buffer).unwrap();
//! assert_eq!(buffer.as_str(), "room  and \n");
//!
//! assert_eq!(count_occurrences("an", "banana"), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `buffer` | Byte-capped owned text buffer |
//! | `normalize` | Space collapsing and digit stripping |
//! | `count` | Overlapping substring counting |
//! | `error` | Error types |

mod buffer;
mod count;
mod error;
mod normalize;

pub use buffer::{MAX_TEXT_LEN, TextBuffer};
pub use count::count_occurrences;
pub use error::TextError;
pub use normalize::{collapse_spaces, strip_digits};
