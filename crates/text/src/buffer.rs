//! Bounded owned text buffer.

use crate::error::TextError;

/// Default capacity of a [`TextBuffer`] in bytes.
pub const MAX_TEXT_LEN: usize = 10_000;

/// An owned text buffer with a hard byte capacity.
///
/// The stored length always stays strictly below the capacity (the final
/// slot is reserved, as for a terminator byte): any write that would make
/// the length meet or exceed `max_len` is rejected whole with
/// [`TextError::CapacityExceeded`] and leaves the buffer unchanged.
/// Lengths are measured in bytes, so multi-byte UTF-8 text consumes
/// capacity faster than its character count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    data: String,
    max_len: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.data.fmt(f)
    }
}

impl TextBuffer {
    /// Creates an empty buffer with the default capacity [`MAX_TEXT_LEN`].
    pub fn new() -> Self {
        Self::with_max_len(MAX_TEXT_LEN)
    }

    /// Creates an empty buffer with the given capacity in bytes.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            data: String::new(),
            max_len,
        }
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the stored length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no text is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity in bytes.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Appends `text` to the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::CapacityExceeded`] if the combined length
    /// would meet or exceed the capacity; nothing is appended in that
    /// case.
    pub fn push_str(&mut self, text: &str) -> Result<(), TextError> {
        let required = self.data.len() + text.len();
        if required >= self.max_len {
            return Err(TextError::CapacityExceeded {
                required,
                max_len: self.max_len,
            });
        }
        self.data.push_str(text);
        Ok(())
    }

    /// Replaces the entire contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::CapacityExceeded`] if `text` on its own would
    /// meet or exceed the capacity; the old contents are kept in that
    /// case.
    pub fn replace(&mut self, text: String) -> Result<(), TextError> {
        if text.len() >= self.max_len {
            return Err(TextError::CapacityExceeded {
                required: text.len(),
                max_len: self.max_len,
            });
        }
        self.data = text;
        Ok(())
    }

    /// Consumes the buffer and returns the owned text.
    pub fn into_string(self) -> String {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.max_len(), MAX_TEXT_LEN);
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn push_str_accumulates() {
        let mut buffer = TextBuffer::new();
        buffer.push_str("hello").unwrap();
        buffer.push_str(" world\n").unwrap();
        assert_eq!(buffer.as_str(), "hello world\n");
        assert_eq!(buffer.len(), 12);
    }

    #[test]
    fn push_str_rejects_at_capacity() {
        let mut buffer = TextBuffer::with_max_len(10);
        buffer.push_str("12345").unwrap();
        let err = buffer.push_str("67890").unwrap_err();
        assert_eq!(
            err,
            TextError::CapacityExceeded {
                required: 10,
                max_len: 10,
            }
        );
        // The rejected write must not be partially applied.
        assert_eq!(buffer.as_str(), "12345");
    }

    #[test]
    fn push_str_fills_to_one_below_capacity() {
        let mut buffer = TextBuffer::with_max_len(10);
        buffer.push_str("123456789").unwrap();
        assert_eq!(buffer.len(), 9);
        assert!(buffer.push_str("0").is_err());
        // An empty append changes nothing and stays under the cap.
        assert!(buffer.push_str("").is_ok());
        assert_eq!(buffer.len(), 9);
    }

    #[test]
    fn replace_swaps_contents() {
        let mut buffer = TextBuffer::with_max_len(10);
        buffer.push_str("old").unwrap();
        buffer.replace("new text".to_string()).unwrap();
        assert_eq!(buffer.as_str(), "new text");
    }

    #[test]
    fn replace_rejects_oversized_text() {
        let mut buffer = TextBuffer::with_max_len(5);
        buffer.push_str("old").unwrap();
        let err = buffer.replace("12345".to_string()).unwrap_err();
        assert_eq!(
            err,
            TextError::CapacityExceeded {
                required: 5,
                max_len: 5,
            }
        );
        assert_eq!(buffer.as_str(), "old");
    }

    #[test]
    fn capacity_counts_bytes_not_chars() {
        let mut buffer = TextBuffer::with_max_len(5);
        // Two three-byte characters need six bytes.
        assert!(buffer.push_str("日本").is_err());
        assert!(buffer.push_str("日").is_ok());
    }

    #[test]
    fn display_matches_contents() {
        let mut buffer = TextBuffer::new();
        buffer.push_str("line\n").unwrap();
        assert_eq!(buffer.to_string(), "line\n");
    }

    #[test]
    fn into_string_returns_contents() {
        let mut buffer = TextBuffer::new();
        buffer.push_str("abc").unwrap();
        assert_eq!(buffer.into_string(), "abc");
    }
}
