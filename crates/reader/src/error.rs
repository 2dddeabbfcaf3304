//! Error types for quill-reader.

/// Error type for all fallible operations in the quill-reader crate.
///
/// This enum covers limit violations while accumulating a text block,
/// absent request lines, configuration problems, and failures of the
/// underlying stream.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Returned when accumulated text would no longer fit its buffer.
    #[error("text block too large: {reason}")]
    BlockTooLarge {
        /// Description of the underlying capacity failure.
        reason: String,
    },

    /// Returned when a single input line exceeds the per-line byte cap.
    #[error("line of {length} bytes exceeds the limit of {max_len}")]
    LineTooLong {
        /// Byte length of the offending line, newline included.
        length: usize,
        /// Maximum allowed line length in bytes.
        max_len: usize,
    },

    /// Returned when a required input line is absent because the stream
    /// already ended.
    #[error("required input line is missing")]
    MissingLine,

    /// Returned when a read limit is configured as zero.
    #[error("invalid limit: {name} must be at least 1")]
    InvalidLimit {
        /// Name of the offending configuration field.
        name: &'static str,
    },

    /// Wraps a failure of the underlying stream.
    #[error("stream error: {reason}")]
    Stream {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<quill_text::TextError> for ReadError {
    fn from(e: quill_text::TextError) -> Self {
        ReadError::BlockTooLarge {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Stream {
            reason: e.to_string(),
        }
    }
}
