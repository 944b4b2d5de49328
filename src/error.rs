//! Error types for the untyped byte-record sort.

use std::fmt;

/// A byte buffer that cannot be split into fixed-width records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Records must be at least one byte wide.
    ZeroWidth,

    /// The buffer length is not a whole number of records.
    Misaligned { len: usize, width: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ZeroWidth => write!(f, "record width must be non-zero"),
            LayoutError::Misaligned { len, width } => {
                write!(
                    f,
                    "buffer of {} bytes is not a multiple of the record width {}",
                    len, width
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
