//! Audit logging module
//!
//! Provides an append-only audit trail of redacted records with hashed values.

pub mod logger;

pub use logger::AuditLogger;
