//! Error types for wlist
//!
//! The taxonomy is small on purpose: every failure is terminal for the
//! current invocation and the operator re-runs with corrected input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an invocation
#[derive(Debug, Error)]
pub enum WlistError {
    /// Input wordlist or names file does not exist
    #[error("file not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// Malformed --add-numbers specification
    #[error("invalid number range '{0}': expected START-END (e.g. 1-100)")]
    InvalidRange(String),

    /// Output destination could not be opened or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WlistError::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "file not found: 'missing.txt'");

        let err = WlistError::InvalidRange("1-2-3".to_string());
        assert!(err.to_string().contains("1-2-3"));
        assert!(err.to_string().contains("START-END"));
    }
}
