//! Result type alias for the redactor
//!
//! Convenience alias that uses [`RedactorError`] as the error type.

use super::errors::RedactorError;

/// Result type alias for redactor operations
///
/// # Examples
///
/// ```
/// use pii_redactor::domain::result::Result;
/// use pii_redactor::domain::errors::RedactorError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RedactorError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedactorError>;
