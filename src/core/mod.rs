//! Core batch logic for the redactor.
//!
//! # Modules
//!
//! - [`batch`] - CSV source and sink, chunked parallel processing, summary
//!
//! # Workflow
//!
//! 1. **Read**: load the identifier and record columns from the source CSV
//! 2. **Redact**: run each chunk through the [`RedactionEngine`] on a
//!    blocking worker
//! 3. **Audit**: append hashed entries for every PII-positive record
//! 4. **Write**: emit the output CSV in input order (skipped on dry runs)
//! 5. **Report**: return a [`batch::BatchSummary`]
//!
//! [`RedactionEngine`]: crate::anonymization::RedactionEngine
//!
//! # Example
//!
//! ```rust,no_run
//! use pii_redactor::config::load_config;
//! use pii_redactor::core::batch::BatchCoordinator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pii-redactor.toml")?;
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let coordinator = BatchCoordinator::new(config, shutdown_rx)?;
//! let summary = coordinator.execute(Path::new("records.csv")).await?;
//!
//! println!("Records with PII: {}", summary.report.records_with_pii);
//! # Ok(())
//! # }
//! ```

pub mod batch;
