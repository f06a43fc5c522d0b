//! Error types for feed I/O

use thiserror::Error;

/// Errors that can occur while fetching or decoding a seating feed
#[derive(Error, Debug)]
pub enum IoError {
    #[error("No seating plan for performance {performance_id}")]
    NotFound { performance_id: u64 },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::ParseError {
            message: e.to_string(),
        }
    }
}

impl From<IoError> for seatplan_core::Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Io(io) => seatplan_core::Error::Io(io),
            other => seatplan_core::Error::InvalidData(other.to_string()),
        }
    }
}
