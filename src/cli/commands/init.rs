//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include commented explanations for every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing PII Redactor configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your column names and paths", self.output);
                println!("  2. Validate configuration: pii-redactor validate-config");
                println!("  3. Preview a run: pii-redactor redact records.csv --dry-run");
                println!("  4. Run: pii-redactor redact records.csv");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# PII Redactor Configuration File

[application]
log_level = "info"
dry_run = false

[batch]
id_column = "record_id"
data_column = "data_json"
output_path = "redacted_output.csv"
parallelism = 4
chunk_size = 256

[audit]
enabled = true
log_path = "./audit/redaction.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with explanatory comments
    fn generate_config_with_examples() -> String {
        r#"# PII Redactor Configuration File
#
# Every setting can be overridden with an environment variable named
# REDACTOR_<SECTION>_<KEY>, e.g. REDACTOR_BATCH_CHUNK_SIZE=512.
# Values may reference environment variables with ${VAR_NAME}.

[application]
# Log level: trace | debug | info | warn | error
log_level = "info"

# Classify and report without writing the output file or audit trail
dry_run = false

[batch]
# Source CSV column holding the record identifier (copied to the output)
id_column = "record_id"

# Source CSV column holding the JSON object to inspect
data_column = "data_json"

# Output CSV with columns record_id, redacted_data_json, is_pii
# output_path = "${REDACTOR_OUT_DIR}/redacted_output.csv"
output_path = "redacted_output.csv"

# Chunks processed concurrently (1-64)
parallelism = 4

# Records per chunk
chunk_size = 256

[audit]
# Append one entry per PII-positive record. Original values are stored
# only as SHA-256 hashes.
enabled = true
log_path = "./audit/redaction.log"

# JSON lines (true) or one plain-text line per record (false)
json_format = true

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
