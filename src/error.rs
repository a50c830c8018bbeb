//! Error types shared by both sequence representations.

use thiserror::Error;

/// Errors raised at the public API boundary.
///
/// Every variant is produced before any work is done on the value; internal
/// recursion assumes pre-validated indices and never fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A requested byte window does not fit its backing buffer.
    #[error("invalid region: offset {offset} + len {len} exceeds buffer of {buffer_len} bytes")]
    InvalidRegion {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    /// A character index at or past the end of the sequence.
    #[error("char index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A slice range that is inverted or extends past the end of the sequence.
    #[error("invalid slice range {start}..{end} (length {len})")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Bytes handed to a validated constructor were not well-formed UTF-8.
    #[error("byte region is not valid UTF-8")]
    InvalidUtf8,
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;
