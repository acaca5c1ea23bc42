//! PII detection and masking
//!
//! This module decides, per record, which fields carry personally
//! identifiable information and replaces them with masked values that keep
//! some structure (last digits, first and last letters, the email domain).
//!
//! # Architecture
//!
//! The redaction pipeline consists of:
//! - **Detection**: field shape rules and quasi-identifier combinations
//! - **Masking**: one strategy per masking category
//! - **Audit**: append-only log with hashed original values
//! - **Reporting**: per-run statistics and masked samples
//!
//! # Usage
//!
//! ```rust
//! use pii_redactor::anonymization::RedactionEngine;
//!
//! let engine = RedactionEngine::new();
//! let processed = engine.redact_raw(r#"{"name": "Asha Rao", "email": "asha@example.com"}"#);
//! assert!(processed.pii_found);
//! assert_eq!(processed.output, r#"{"name": "AXXa RXo", "email": "aa@example.com"}"#);
//! ```

pub mod anonymizer;
pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod report;

// Re-export main types
pub use config::AuditConfig;
pub use engine::{detect_and_redact, ProcessedRecord, RedactionEngine};
pub use models::{Detection, DetectionSource, FlaggedField, MaskingCategory, RedactionOutcome};
pub use report::BatchReport;
