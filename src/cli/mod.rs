//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the redactor using clap.

pub mod commands;

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// PII Redactor - detect and mask personal data in JSON records
#[derive(Parser, Debug)]
#[command(name = "pii-redactor")]
#[command(version, about, long_about = None)]
#[command(author = "PII Redactor Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "REDACTOR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REDACTOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact PII from every record of a CSV file
    Redact(commands::redact::RedactArgs),

    /// Redact a single JSON record and print the result
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
