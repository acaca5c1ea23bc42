//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the redactor configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading applies env overrides and validates
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  ID Column: {}", config.batch.id_column);
        println!("  Data Column: {}", config.batch.data_column);
        println!("  Output Path: {}", config.batch.output_path);
        println!("  Parallelism: {}", config.batch.parallelism);
        println!("  Chunk Size: {}", config.batch.chunk_size);
        if config.audit.enabled {
            println!(
                "  Audit Log: {} ({})",
                config.audit.log_path.display(),
                if config.audit.json_format { "json" } else { "text" }
            );
        } else {
            println!("  Audit Log: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} (rotation: {})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}
