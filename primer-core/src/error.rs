//! Error types for the primer exercises

use thiserror::Error;

/// Result type for primer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Primer errors
#[derive(Error, Debug)]
pub enum Error {
    /// A token could not be parsed as the expected kind of value
    #[error("Parse error: expected {what}, found {token:?}")]
    Parse {
        /// What the reader was looking for (e.g. "units sold")
        what: &'static str,
        /// The offending token
        token: String,
    },

    /// Input ended in the middle of a value
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the reader was looking for
        expected: &'static str,
    },

    /// Two transactions were combined across different ISBNs
    #[error("ISBN mismatch: {left} vs {right}")]
    IsbnMismatch {
        /// ISBN of the running total
        left: String,
        /// ISBN of the incoming transaction
        right: String,
    },

    /// An ISBN reappeared after its group was already flushed
    #[error("Transactions for {0} are not grouped together")]
    Ungrouped(String),

    /// Units or revenue overflowed while combining
    #[error("Overflow while combining transactions for {0}")]
    Overflow(String),

    /// Input is well-formed but not acceptable (e.g. empty ISBN)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for errors caused by the shape of the input rather than the
    /// environment (bad tokens, truncated records, mismatched ISBNs).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. }
                | Error::UnexpectedEof { .. }
                | Error::IsbnMismatch { .. }
                | Error::Ungrouped(_)
                | Error::Overflow(_)
                | Error::InvalidInput(_)
        )
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
