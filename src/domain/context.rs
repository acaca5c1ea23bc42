//! Error context extension trait
//!
//! A counterpart to `anyhow::Context` for `Result<T, RedactorError>`. The
//! context is prefixed to the message and the error variant is kept, so the
//! CLI exit code does not change.
//!
//! # Examples
//!
//! ```rust
//! use pii_redactor::domain::Result;
//! use pii_redactor::domain::context::ResultExt;
//!
//! fn read_source(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read {}", path))
//! }
//! ```

use crate::domain::errors::RedactorError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display;

    /// Add context to an error, computing it only on failure
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RedactorError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display,
    {
        self.map_err(|e| RedactorError::with_context(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| RedactorError::with_context(e.into(), f()))
    }
}

impl RedactorError {
    /// Prefix the message with `context`, keeping the variant
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        let wrap = |msg: String| format!("{context}: {msg}");
        match self {
            Self::Configuration(m) => Self::Configuration(wrap(m)),
            Self::Input(m) => Self::Input(wrap(m)),
            Self::Output(m) => Self::Output(wrap(m)),
            Self::Csv(m) => Self::Csv(wrap(m)),
            Self::Audit(m) => Self::Audit(wrap(m)),
            Self::Validation(m) => Self::Validation(wrap(m)),
            Self::Serialization(m) => Self::Serialization(wrap(m)),
            Self::Io(m) => Self::Io(wrap(m)),
            Self::Other(m) => Self::Other(wrap(m)),
        }
    }
}
