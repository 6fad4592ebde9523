//! # Error Types

/// Errors from namecaster operations.
#[derive(Debug, thiserror::Error)]
pub enum NamecasterError {
    /// A nationality label was absent from the supplied label index.
    ///
    /// This signals that the label configuration does not match the row
    /// source; it always propagates, never defaults.
    #[error("unknown nationality: {nationality:?}")]
    UnknownNationality {
        /// The label that was not found.
        nationality: String,
    },

    /// A row index was outside the row source's bounds.
    #[error("row index {index} out of bounds for {count} rows")]
    RowOutOfBounds {
        /// The requested row index.
        index: usize,
        /// The row source's total count.
        count: usize,
    },

    /// An index sequence did not match the classifier's fixed length.
    #[error("sequence length {actual} does not match configured length {expected}")]
    SequenceLengthMismatch {
        /// The length the classifier was built for.
        expected: usize,
        /// The length that reached it.
        actual: usize,
    },

    /// A token index was outside the embedding table's range.
    #[error("token {token} out of range for vocab size {vocab_size}")]
    TokenOutOfRange {
        /// The offending token index.
        token: usize,
        /// The embedding table's row count.
        vocab_size: usize,
    },

    /// A configuration value was unusable.
    #[error("bad config: {0}")]
    BadConfig(String),
}

/// Result type for namecaster operations.
pub type NCResult<T> = core::result::Result<T, NamecasterError>;
