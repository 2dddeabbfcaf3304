//! # quill-reader
//!
//! Bounded line-oriented input: text blocks terminated by a blank-line
//! pair, and single required request lines.
//!
//! All readers take any [`std::io::BufRead`], so tests drive them from
//! in-memory cursors and the binary drives them from locked stdin.
//!
//! ## Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use quill_reader::{ReadConfig, read_block};
//!
//! let mut input = Cursor::new("first\nsecond\n\n\nnot read\n");
//! let block = read_block(&mut input, &ReadConfig::default()).unwrap();
//! assert_eq!(block.as_str(), "first\nsecond\n");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `block` | Read limits, block reading, request-line reading |
//! | `error` | Error types |

mod block;
mod error;

pub use block::{MAX_LINE_LEN, ReadConfig, read_block, read_request_line};
pub use error::ReadError;
