//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::anonymization::config::AuditConfig;
use serde::{Deserialize, Serialize};

/// Main redactor configuration
///
/// Every section is optional in the TOML file and falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedactorConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Batch source/sink and worker settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RedactorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.batch.validate()?;
        self.audit.validate().map_err(|e| e.to_string())?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (classify and report, write no output)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Batch driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Source column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Source column holding the serialized record
    #[serde(default = "default_data_column")]
    pub data_column: String,

    /// Output CSV path
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Maximum number of chunks processed concurrently (1-64)
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,

    /// Records per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            data_column: default_data_column(),
            output_path: default_output_path(),
            parallelism: default_parallelism(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id_column.trim().is_empty() {
            return Err("batch.id_column cannot be empty".to_string());
        }
        if self.data_column.trim().is_empty() {
            return Err("batch.data_column cannot be empty".to_string());
        }
        if self.id_column == self.data_column {
            return Err(format!(
                "batch.id_column and batch.data_column must differ (both '{}')",
                self.id_column
            ));
        }
        if self.output_path.trim().is_empty() {
            return Err("batch.output_path cannot be empty".to_string());
        }
        if self.parallelism == 0 || self.parallelism > 64 {
            return Err(format!(
                "batch.parallelism must be between 1 and 64, got {}",
                self.parallelism
            ));
        }
        if self.chunk_size == 0 {
            return Err("batch.chunk_size must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_id_column() -> String {
    "record_id".to_string()
}

fn default_data_column() -> String {
    "data_json".to_string()
}

fn default_output_path() -> String {
    "redacted_output.csv".to_string()
}

fn default_parallelism() -> usize {
    4
}

fn default_chunk_size() -> usize {
    256
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
