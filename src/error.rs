//! Error types for jotter

use thiserror::Error;

/// Main error type for jotter application
#[derive(Debug, Error)]
pub enum JotterError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("A note titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("No note matches '{0}'")]
    NoteNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JotterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::Storage(_) => 2,
            JotterError::EmptyField(_) | JotterError::DuplicateTitle(_) => 3,
            JotterError::NoteNotFound(_) => 4,
            JotterError::Io(_) => 1,
        }
    }

    /// Whether this error ends the process. Validation and lookup failures
    /// are reported and the menu keeps running; storage failures are not
    /// recoverable because durability can no longer be guaranteed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, JotterError::Storage(_) | JotterError::Io(_))
    }
}

/// Result type using JotterError
pub type Result<T> = std::result::Result<T, JotterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_recoverable() {
        assert!(!JotterError::EmptyField("title").is_fatal());
        assert!(!JotterError::DuplicateTitle("Groceries".to_string()).is_fatal());
        assert!(!JotterError::NoteNotFound("trip".to_string()).is_fatal());
    }

    #[test]
    fn test_storage_errors_are_fatal() {
        assert!(JotterError::Storage("unparseable document".to_string()).is_fatal());
        assert!(JotterError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")).is_fatal());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(JotterError::Storage("bad".to_string()).exit_code(), 2);
        assert_eq!(JotterError::EmptyField("body").exit_code(), 3);
        assert_eq!(JotterError::NoteNotFound("x".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_display_messages() {
        let err = JotterError::DuplicateTitle("Groceries".to_string());
        assert_eq!(err.to_string(), "A note titled 'Groceries' already exists");

        let err = JotterError::EmptyField("title");
        assert_eq!(err.to_string(), "title must not be empty");
    }
}
