// PII Redactor - Batch PII detection and masking
// Copyright (c) 2025 PII Redactor Contributors
// Licensed under the MIT License

//! # PII Redactor
//!
//! Detects personally identifiable information in flat JSON records and
//! replaces it with structure-preserving masks.
//!
//! ## Overview
//!
//! A field is flagged when either:
//! - its name has a known shape rule (`phone`, `aadhar`, `passport`,
//!   `upi_id`) and the whole string value matches it, or
//! - two or more quasi-identifiers (`name`, `email`, `address`,
//!   `ip_address`, `device_id`) are present together.
//!
//! Flagged values are masked by category: trailing digits kept, first and
//! last letters kept, email domain kept, or the value replaced entirely.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Batch driver (CSV in, CSV out, chunked parallel workers)
//! - [`anonymization`] - Classifiers, masking, audit trail, reporting
//! - [`domain`] - Records, codec, error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use pii_redactor::anonymization::detect_and_redact;
//!
//! let (redacted, is_pii) = detect_and_redact(r#"{"phone": "9876543210", "city": "Pune"}"#);
//! assert!(is_pii);
//! assert_eq!(redacted, r#"{"phone": "XXXXXX3210", "city": "Pune"}"#);
//!
//! // Anything that is not a JSON object passes through untouched
//! let (raw, is_pii) = detect_and_redact("not json");
//! assert!(!is_pii);
//! assert_eq!(raw, "not json");
//! ```
//!
//! ## Batch Runs
//!
//! ```rust,no_run
//! use pii_redactor::config::load_config_or_default;
//! use pii_redactor::core::batch::BatchCoordinator;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("pii-redactor.toml")?;
//!     let (_tx, rx) = tokio::sync::watch::channel(false);
//!
//!     let summary = BatchCoordinator::new(config, rx)?
//!         .execute(Path::new("records.csv"))
//!         .await?;
//!
//!     println!("{}", summary.report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The detection core never fails. File, configuration and audit errors use
//! [`domain::RedactorError`]:
//!
//! ```rust,no_run
//! use pii_redactor::domain::RedactorError;
//!
//! fn example() -> Result<(), RedactorError> {
//!     let config = pii_redactor::config::load_config("pii-redactor.toml")?;
//!     println!("{}", config.batch.output_path);
//!     Ok(())
//! }
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
