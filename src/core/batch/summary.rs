//! Batch run summary
//!
//! Wraps the [`BatchReport`] statistics with run-level facts: duration,
//! interruption, and where (if anywhere) the output went.

use crate::anonymization::BatchReport;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a batch redaction run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Per-record statistics and samples
    pub report: BatchReport,

    /// Rows read from the source
    pub rows_read: usize,

    /// Rows written to the output (zero on a dry run)
    pub rows_written: usize,

    /// Output file, if one was written
    pub output_path: Option<PathBuf>,

    /// Whether the run stopped early on a shutdown signal
    pub interrupted: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl BatchSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            report: BatchReport::new(),
            rows_read: 0,
            rows_written: 0,
            output_path: None,
            interrupted: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration, mirrored into the report
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self.report.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Rows read but never processed because of an interruption
    pub fn rows_skipped(&self) -> usize {
        self.rows_read.saturating_sub(self.report.total_records)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            rows_read = self.rows_read,
            total_records = self.report.total_records,
            records_with_pii = self.report.records_with_pii,
            undecodable_records = self.report.undecodable_records,
            flagged_fields = self.report.total_flagged_fields,
            rows_written = self.rows_written,
            interrupted = self.interrupted,
            duration_ms = self.duration.as_millis() as u64,
            "Batch summary"
        );

        for warning in &self.report.warnings {
            tracing::warn!(warning = %warning, "Batch warning");
        }
    }
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self::new()
    }
}
