//! Domain error types
//!
//! This module defines the error hierarchy for the redactor. Errors only come
//! from the outer layers (configuration, batch input/output, audit trail);
//! the per-record detection core is total and never returns one.

use thiserror::Error;

/// Main redactor error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error kinds and carries context for the CLI exit codes.
#[derive(Debug, Error)]
pub enum RedactorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Batch input could not be opened or is missing required columns
    #[error("Input error: {0}")]
    Input(String),

    /// Batch output could not be written
    #[error("Output error: {0}")]
    Output(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl RedactorError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) | Self::Validation(_) => 2,
            Self::Input(_) => 3,
            _ => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedactorError {
    fn from(err: std::io::Error) -> Self {
        RedactorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedactorError {
    fn from(err: serde_json::Error) -> Self {
        RedactorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedactorError {
    fn from(err: toml::de::Error) -> Self {
        RedactorError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for RedactorError {
    fn from(err: csv::Error) -> Self {
        RedactorError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redactor_error_display() {
        let err = RedactorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RedactorError::Configuration("x".into()).exit_code(), 2);
        assert_eq!(RedactorError::Validation("x".into()).exit_code(), 2);
        assert_eq!(RedactorError::Input("x".into()).exit_code(), 3);
        assert_eq!(RedactorError::Output("x".into()).exit_code(), 5);
        assert_eq!(RedactorError::Io("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: RedactorError = io_err.into();
        assert!(matches!(err, RedactorError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RedactorError = json_err.into();
        assert!(matches!(err, RedactorError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: RedactorError = toml_err.into();
        assert!(matches!(err, RedactorError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_csv_error_conversion() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_err = reader
            .records()
            .find_map(|r| r.err())
            .expect("ragged row should fail");
        let err: RedactorError = csv_err.into();
        assert!(matches!(err, RedactorError::Csv(_)));
    }

    #[test]
    fn test_redactor_error_implements_std_error() {
        let err = RedactorError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
