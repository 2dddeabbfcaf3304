//! In-place text normalization passes.

use crate::buffer::TextBuffer;
use crate::error::TextError;

/// Collapses every run of ASCII spaces to a single space and drops
/// leading and trailing spaces.
///
/// Only the space character (0x20) counts: tabs, newlines, and other
/// Unicode whitespace pass through untouched, so the line structure of a
/// multi-line block survives. A newline therefore also ends a run, which
/// keeps a space-then-newline sequence from eating into the next line.
/// The pass is idempotent.
///
/// # Errors
///
/// Returns [`TextError::CapacityExceeded`] if the result would not fit
/// the buffer; a pass that only removes bytes cannot trigger this.
pub fn collapse_spaces(buffer: &mut TextBuffer) -> Result<(), TextError> {
    let mut out = String::with_capacity(buffer.len());
    for ch in buffer.as_str().chars() {
        if ch == ' ' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    buffer.replace(out)
}

/// Removes every ASCII decimal digit, keeping all other characters in
/// their original order.
///
/// Digits from other scripts are not touched. The pass is idempotent.
///
/// # Errors
///
/// Returns [`TextError::CapacityExceeded`] if the result would not fit
/// the buffer; a pass that only removes bytes cannot trigger this.
pub fn strip_digits(buffer: &mut TextBuffer) -> Result<(), TextError> {
    let out: String = buffer
        .as_str()
        .chars()
        .filter(|ch| !ch.is_ascii_digit())
        .collect();
    buffer.replace(out)
}
