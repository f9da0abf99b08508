//! Error types for oread-io.

use std::path::PathBuf;

use oread_strain::StrainError;

/// Error type for all fallible operations in the oread-io crate.
///
/// Covers filesystem failures, strain text format problems, result
/// serialization, and invalid injection parameters.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a required header key is missing from a strain file.
    #[error("missing header '{name}' in {}", path.display())]
    MissingHeader {
        /// Name of the missing header key.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a line of a strain file cannot be parsed.
    #[error("parse error at {}:{line}: {reason}", path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Description of the failure.
        reason: String,
    },

    /// Returned when JSON serialization fails.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when injection parameters are inconsistent.
    #[error("invalid injection: {reason}")]
    InvalidInjection {
        /// Description of the inconsistency.
        reason: String,
    },

    /// Wraps a strain series validation failure.
    #[error("strain error: {0}")]
    Strain(#[from] StrainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/data/missing.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /data/missing.txt");
    }

    #[test]
    fn error_missing_header() {
        let err = IoError::MissingHeader {
            name: "sample_rate".to_string(),
            path: PathBuf::from("event.txt"),
        };
        assert_eq!(err.to_string(), "missing header 'sample_rate' in event.txt");
    }

    #[test]
    fn error_parse_includes_location() {
        let err = IoError::Parse {
            path: PathBuf::from("event.txt"),
            line: 7,
            reason: "invalid float literal".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("event.txt:7"));
        assert!(msg.contains("invalid float literal"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
