//! Domain models and types for the redactor.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`Record`], [`RecordId`]) and the serialized-object codec
//! - **Error types** ([`RedactorError`])
//! - **Result type alias** ([`Result`])
//! - **Error context** ([`context::ResultExt`])
//!
//! # Error Handling
//!
//! Fallible operations in the outer layers return [`Result<T, RedactorError>`]:
//!
//! ```rust,no_run
//! use pii_redactor::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = pii_redactor::config::load_config("pii-redactor.toml")?;
//!     println!("{}", config.batch.output_path);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod errors;
pub mod record;
pub mod result;

pub use errors::RedactorError;
pub use record::{decode_record, display_form, encode_record, is_non_empty, Record, RecordId};
pub use result::Result;
