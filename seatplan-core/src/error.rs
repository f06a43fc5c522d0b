//! Error types for seatplan

use thiserror::Error;

/// Main error type for seatplan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seat record at position {index}: {reason}")]
    InvalidSeatRecord { index: usize, reason: String },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Seating plan not ready: {0}")]
    NotReady(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for seatplan operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a rejected seat record
    pub fn invalid_seat(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidSeatRecord {
            index,
            reason: reason.into(),
        }
    }
}
