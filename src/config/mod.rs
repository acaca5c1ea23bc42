//! Configuration management for the redactor.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `REDACTOR_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`BatchConfig`] - Source columns, output path, worker settings
//! - [`AuditConfig`] - Audit trail location and format
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [batch]
//! id_column = "record_id"
//! data_column = "data_json"
//! output_path = "${REDACTOR_OUT_DIR}/redacted.csv"
//! parallelism = 4
//! chunk_size = 256
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/redaction.log"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use pii_redactor::config::load_config;
//!
//! # fn example() {
//! match load_config("pii-redactor.toml") {
//!     Ok(config) => println!("Writing to {}", config.batch.output_path),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::anonymization::config::AuditConfig;
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, BatchConfig, LoggingConfig, RedactorConfig};
