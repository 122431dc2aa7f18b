//! Error types for bit-level reads.

use thiserror::Error;

/// Errors produced when reading bits through a [crate::reader::BitReader].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// A read or skip would advance past the end of the buffer. The reader
    /// is invalid afterwards; every further read or skip fails with this
    /// error until [crate::reader::BitReader::reset] is called.
    #[error("end of buffer exceeded")]
    EndOfBuffer,
    /// More than 64 bits were requested in a single read.
    #[error("more than 64 bits requested in a single read")]
    TooManyBitsRead,
}
