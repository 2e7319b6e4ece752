//! Reader error type.

use thiserror::Error;

/// Error returned when a read cannot be satisfied from the buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The read needs more bytes than are left after the cursor.
    ///
    /// The cursor is left where it was before the failed read.
    #[error("read of {requested} bytes at offset {position} is out of bounds ({remaining} bytes left)")]
    OutOfBounds {
        position: usize,
        requested: usize,
        remaining: usize,
    },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;
