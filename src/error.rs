//! Error types for StackDb.

use std::io;

use thiserror::Error;

/// The result type used throughout StackDb.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for StackDb operations.
///
/// Lookups that find nothing are not errors: they come back as `None` or an
/// empty key set.
#[derive(Debug, Error)]
pub enum Error {
    /// `ROLLBACK` was issued while no transaction is open.
    #[error("There is no transaction for rollback.")]
    NoActiveTransaction,

    /// The input line was not a recognized command, or its arguments
    /// failed validation.
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a new unknown command error.
    pub fn unknown_command(line: impl Into<String>) -> Self {
        Error::UnknownCommand(line.into())
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns `true` if the session can keep going after this error.
    ///
    /// Only I/O failures end a session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoActiveTransaction;
        assert_eq!(err.to_string(), "There is no transaction for rollback.");

        let err = Error::unknown_command("FLY away");
        assert!(err.to_string().contains("FLY away"));

        let err = Error::invalid_argument("prompt must be a single line");
        assert_eq!(err.to_string(), "Invalid argument: prompt must be a single line");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::NoActiveTransaction.is_recoverable());
        assert!(Error::unknown_command("").is_recoverable());
    }
}
