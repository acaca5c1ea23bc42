//! Redact command implementation
//!
//! This module implements the `redact` command, which runs the batch driver
//! over a CSV file.

use crate::config::load_config_or_default;
use crate::core::batch::BatchCoordinator;
use crate::log_error_with_context;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Source CSV file
    pub input: PathBuf,

    /// Override the output CSV path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Classify and report without writing output or audit entries
    #[arg(long)]
    pub dry_run: bool,

    /// Write the batch report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Disable the audit trail for this run
    #[arg(long)]
    pub no_audit: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting redact command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(e.exit_code());
            }
        };

        // Apply CLI overrides
        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.batch.output_path = output.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        if self.no_audit {
            tracing::info!("Disabling audit trail from CLI");
            config.audit.enabled = false;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No output will be written");
            println!();
        }

        let coordinator = match BatchCoordinator::new(config, shutdown_signal) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to initialize batch run");
                eprintln!("Failed to initialize batch run: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("🚀 Redacting {}...", self.input.display());

        let summary = match coordinator.execute(&self.input).await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Batch run failed");
                eprintln!("Redaction failed: {e}");
                return Ok(e.exit_code());
            }
        };

        summary.log_summary();
        print!("{}", summary.report.format_console());

        if let Some(path) = &summary.output_path {
            println!("📄 Output written: {} ({} rows)", path.display(), summary.rows_written);
        }

        if let Some(report_path) = &self.report {
            write_report(report_path, &summary.report)?;
            println!("📄 Report written: {}", report_path.display());
        }

        if summary.interrupted {
            println!();
            println!("⚠️  Redaction interrupted. Rows processed so far were written.");
            tracing::info!("Redaction interrupted by user signal");
            return Ok(130);
        }

        println!("✅ Redaction completed successfully!");
        Ok(0)
    }
}

fn write_report(path: &Path, report: &crate::anonymization::BatchReport) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }
    report
        .write_to_file(path)
        .with_context(|| format!("Failed to write report {}", path.display()))
}
