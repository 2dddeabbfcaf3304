//! Bounded reading of text blocks and request lines.

use std::io::BufRead;

use tracing::debug;

use quill_text::{MAX_TEXT_LEN, TextBuffer};

use crate::error::ReadError;

/// Default maximum length of a single input line in bytes, newline
/// included.
pub const MAX_LINE_LEN: usize = 1_000;

// ---------------------------------------------------------------------------
// ReadConfig
// ---------------------------------------------------------------------------

/// Limits applied while reading a text block.
///
/// Use the builder methods (`with_*`) to customise the caps. The
/// [`Default`] implementation applies the standard limits: blocks below
/// [`MAX_TEXT_LEN`] bytes, lines of at most [`MAX_LINE_LEN`] bytes.
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Capacity of the block buffer in bytes.
    max_text_len: usize,
    /// Maximum length of a single line in bytes, newline included.
    max_line_len: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_text_len: MAX_TEXT_LEN,
            max_line_len: MAX_LINE_LEN,
        }
    }
}

impl ReadConfig {
    /// Set the block buffer capacity in bytes.
    pub fn with_max_text_len(mut self, max_len: usize) -> Self {
        self.max_text_len = max_len;
        self
    }

    /// Set the single-line cap in bytes.
    pub fn with_max_line_len(mut self, max_len: usize) -> Self {
        self.max_line_len = max_len;
        self
    }

    /// Returns the block buffer capacity in bytes.
    pub fn max_text_len(&self) -> usize {
        self.max_text_len
    }

    /// Returns the single-line cap in bytes.
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Validate that the configured limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidLimit`] if either limit is zero.
    pub fn validate(&self) -> Result<(), ReadError> {
        if self.max_text_len == 0 {
            return Err(ReadError::InvalidLimit {
                name: "max_text_len",
            });
        }
        if self.max_line_len == 0 {
            return Err(ReadError::InvalidLimit {
                name: "max_line_len",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_block
// ---------------------------------------------------------------------------

/// Reads lines from `input` into a bounded buffer until a blank-line pair
/// or the end of the stream.
///
/// Lines keep their trailing newlines. A blank line is exactly `"\n"`:
/// a line holding spaces or tabs is content. The first blank line is held
/// back rather than stored; if the next line is blank too, the pair
/// terminates the block and neither is stored, while a content line (or
/// the end of the stream) flushes the held newline first, so single blank
/// lines inside the block survive verbatim.
///
/// # Errors
///
/// The whole read fails, with no partial buffer returned, when:
///
/// - a line would push the accumulated block to the buffer capacity or
///   beyond ([`ReadError::BlockTooLarge`]);
/// - a single line is longer than `max_line_len` bytes
///   ([`ReadError::LineTooLong`]);
/// - the configured limits are unusable ([`ReadError::InvalidLimit`]);
/// - the underlying stream fails ([`ReadError::Stream`]).
pub fn read_block<R: BufRead>(input: &mut R, config: &ReadConfig) -> Result<TextBuffer, ReadError> {
    config.validate()?;

    let mut buffer = TextBuffer::with_max_len(config.max_text_len);
    let mut pending_blank = false;
    let mut n_lines: usize = 0;
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            if pending_blank {
                buffer.push_str("\n")?;
                n_lines += 1;
            }
            break;
        }
        if line.len() > config.max_line_len {
            return Err(ReadError::LineTooLong {
                length: line.len(),
                max_len: config.max_line_len,
            });
        }

        if line == "\n" {
            if pending_blank {
                // Second consecutive blank line; the pair is dropped.
                break;
            }
            pending_blank = true;
            continue;
        }

        if pending_blank {
            buffer.push_str("\n")?;
            n_lines += 1;
            pending_blank = false;
        }
        buffer.push_str(&line)?;
        n_lines += 1;
    }

    debug!(n_lines, n_bytes = buffer.len(), "text block read");
    Ok(buffer)
}

// ---------------------------------------------------------------------------
// read_request_line
// ---------------------------------------------------------------------------

/// Reads one required line from `input` and strips its line ending.
///
/// Meant for request parameters that follow a text block on a line of
/// their own, such as a search substring. The line may be empty; only a
/// stream that has already ended counts as missing.
///
/// # Errors
///
/// Returns [`ReadError::MissingLine`] at the end of the stream,
/// [`ReadError::LineTooLong`] for a line longer than `max_line_len`
/// bytes, or [`ReadError::Stream`] if the underlying stream fails.
pub fn read_request_line<R: BufRead>(
    input: &mut R,
    max_line_len: usize,
) -> Result<String, ReadError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ReadError::MissingLine);
    }
    if line.len() > max_line_len {
        return Err(ReadError::LineTooLong {
            length: line.len(),
            max_len: max_line_len,
        });
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    debug!(n_bytes = line.len(), "request line read");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(input: &str) -> Result<TextBuffer, ReadError> {
        read_block(&mut Cursor::new(input), &ReadConfig::default())
    }

    #[test]
    fn default_config_limits() {
        let config = ReadConfig::default();
        assert_eq!(config.max_text_len(), 10_000);
        assert_eq!(config.max_line_len(), 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_limits() {
        let config = ReadConfig::default()
            .with_max_text_len(64)
            .with_max_line_len(16);
        assert_eq!(config.max_text_len(), 64);
        assert_eq!(config.max_line_len(), 16);
    }

    #[test]
    fn zero_limits_fail_validation() {
        let config = ReadConfig::default().with_max_text_len(0);
        assert!(matches!(
            config.validate(),
            Err(ReadError::InvalidLimit {
                name: "max_text_len",
            })
        ));

        let config = ReadConfig::default().with_max_line_len(0);
        assert!(matches!(
            config.validate(),
            Err(ReadError::InvalidLimit {
                name: "max_line_len",
            })
        ));
    }

    #[test]
    fn reads_until_blank_pair() {
        let buffer = read_str("first line\nsecond line\n\n\nignored\n").unwrap();
        assert_eq!(buffer.as_str(), "first line\nsecond line\n");
    }

    #[test]
    fn reads_until_eof() {
        let buffer = read_str("only line\n").unwrap();
        assert_eq!(buffer.as_str(), "only line\n");
    }

    #[test]
    fn empty_input_reads_empty_block() {
        let buffer = read_str("").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn immediate_blank_pair_reads_empty_block() {
        let buffer = read_str("\n\nignored\n").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn single_blank_line_is_content() {
        let buffer = read_str("above\n\nbelow\n").unwrap();
        assert_eq!(buffer.as_str(), "above\n\nbelow\n");
    }

    #[test]
    fn trailing_single_blank_before_eof_is_content() {
        let buffer = read_str("above\n\n").unwrap();
        assert_eq!(buffer.as_str(), "above\n\n");
    }

    #[test]
    fn whitespace_line_is_not_blank() {
        let buffer = read_str("a\n \n\nb\n").unwrap();
        // The space-holding line interrupts the pair.
        assert_eq!(buffer.as_str(), "a\n \n\nb\n");
    }

    #[test]
    fn terminator_pair_is_never_stored() {
        let buffer = read_str("text\n\n\n").unwrap();
        assert_eq!(buffer.as_str(), "text\n");
    }

    #[test]
    fn unterminated_last_line_is_kept() {
        let buffer = read_str("no newline at end").unwrap();
        assert_eq!(buffer.as_str(), "no newline at end");
    }

    #[test]
    fn oversized_block_is_rejected_whole() {
        let config = ReadConfig::default().with_max_text_len(16);
        let err = read_block(&mut Cursor::new("0123456789\nabcdef\n"), &config).unwrap_err();
        assert!(matches!(err, ReadError::BlockTooLarge { .. }));
    }

    #[test]
    fn block_just_under_capacity_is_accepted() {
        let config = ReadConfig::default().with_max_text_len(12);
        let buffer = read_block(&mut Cursor::new("0123456789\n"), &config).unwrap();
        assert_eq!(buffer.len(), 11);
    }

    #[test]
    fn block_reaching_capacity_is_rejected() {
        let config = ReadConfig::default().with_max_text_len(11);
        let err = read_block(&mut Cursor::new("0123456789\n"), &config).unwrap_err();
        assert!(matches!(err, ReadError::BlockTooLarge { .. }));
    }

    #[test]
    fn oversized_line_is_rejected() {
        let config = ReadConfig::default().with_max_line_len(8);
        let err = read_block(&mut Cursor::new("short\ntoo long a line\n"), &config).unwrap_err();
        assert!(matches!(
            err,
            ReadError::LineTooLong {
                length: 16,
                max_len: 8,
            }
        ));
    }

    #[test]
    fn line_exactly_at_cap_is_accepted() {
        let config = ReadConfig::default().with_max_line_len(8);
        let buffer = read_block(&mut Cursor::new("1234567\n"), &config).unwrap();
        assert_eq!(buffer.len(), 8);
    }

    #[test]
    fn request_line_strips_newline() {
        let mut input = Cursor::new("needle\nrest\n");
        let line = read_request_line(&mut input, MAX_LINE_LEN).unwrap();
        assert_eq!(line, "needle");
    }

    #[test]
    fn request_line_strips_crlf() {
        let mut input = Cursor::new("needle\r\n");
        let line = read_request_line(&mut input, MAX_LINE_LEN).unwrap();
        assert_eq!(line, "needle");
    }

    #[test]
    fn request_line_may_be_empty() {
        let mut input = Cursor::new("\n");
        let line = read_request_line(&mut input, MAX_LINE_LEN).unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn request_line_without_newline_is_kept() {
        let mut input = Cursor::new("needle");
        let line = read_request_line(&mut input, MAX_LINE_LEN).unwrap();
        assert_eq!(line, "needle");
    }

    #[test]
    fn missing_request_line_is_reported() {
        let mut input = Cursor::new("");
        assert!(matches!(
            read_request_line(&mut input, MAX_LINE_LEN),
            Err(ReadError::MissingLine)
        ));
    }

    #[test]
    fn oversized_request_line_is_rejected() {
        let mut input = Cursor::new("0123456789\n");
        assert!(matches!(
            read_request_line(&mut input, 4),
            Err(ReadError::LineTooLong { .. })
        ));
    }
}
