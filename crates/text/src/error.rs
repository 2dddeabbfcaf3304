//! Error types for the quill-text crate.

/// Error type for all fallible operations in the quill-text crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextError {
    /// Returned when stored text would meet or exceed a buffer's capacity.
    #[error("text of {required} bytes does not fit in a buffer of {max_len}")]
    CapacityExceeded {
        /// Total byte length the buffer would have to hold.
        required: usize,
        /// The buffer's capacity in bytes.
        max_len: usize,
    },
}
