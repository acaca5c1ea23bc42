//! Batch coordinator - orchestrates one redaction run
//!
//! Reads the source, fans chunks out to blocking workers, collects results in
//! input order, feeds the audit trail and report, then writes the sink.

use super::reader::{read_source, SourceRow};
use super::summary::BatchSummary;
use super::writer::write_output;
use crate::anonymization::audit::AuditLogger;
use crate::anonymization::{ProcessedRecord, RedactionEngine};
use crate::config::RedactorConfig;
use crate::domain::{RecordId, RedactorError, Result};
use crate::{log_batch_complete, log_batch_start, log_chunk_processing};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinError;
use uuid::Uuid;

type ProcessedChunk = Vec<(RecordId, ProcessedRecord)>;

/// Batch coordinator
pub struct BatchCoordinator {
    config: RedactorConfig,
    engine: Arc<RedactionEngine>,
    audit: AuditLogger,
    shutdown_signal: watch::Receiver<bool>,
}

impl BatchCoordinator {
    /// Create a coordinator for one run.
    ///
    /// The configuration is validated first. The audit trail is disabled on
    /// dry runs.
    pub fn new(config: RedactorConfig, shutdown_signal: watch::Receiver<bool>) -> Result<Self> {
        config.validate().map_err(|e| {
            RedactorError::Configuration(format!("Configuration validation failed: {}", e))
        })?;

        let audit = AuditLogger::new(
            config.audit.log_path.clone(),
            config.audit.json_format,
            config.audit.enabled && !config.application.dry_run,
        )
        .map_err(|e| RedactorError::Audit(format!("{e:#}")))?;

        Ok(Self {
            config,
            engine: Arc::new(RedactionEngine::new()),
            audit,
            shutdown_signal,
        })
    }

    /// Identifier of this run
    pub fn run_id(&self) -> Uuid {
        self.audit.run_id()
    }

    /// Execute the run against `input`.
    ///
    /// A shutdown signal stops the run after the chunk in progress; rows
    /// processed so far are still written.
    pub async fn execute(&self, input: &Path) -> Result<BatchSummary> {
        let start_time = Instant::now();
        let dry_run = self.config.application.dry_run;
        let mut summary = BatchSummary::new();
        summary.report.run_id = Some(self.run_id().to_string());
        summary.report.dry_run = dry_run;

        log_batch_start!(input.display(), self.run_id());

        let rows = {
            let path = input.to_path_buf();
            let batch = self.config.batch.clone();
            tokio::task::spawn_blocking(move || read_source(&path, &batch))
                .await
                .map_err(join_error)??
        };
        summary.rows_read = rows.len();

        if rows.is_empty() {
            summary
                .report
                .add_warning("Input contained no data rows".to_string());
        }

        let chunks: Vec<Vec<SourceRow>> = rows
            .chunks(self.config.batch.chunk_size)
            .map(<[SourceRow]>::to_vec)
            .collect();
        drop(rows);

        tracing::debug!(
            chunks = chunks.len(),
            chunk_size = self.config.batch.chunk_size,
            parallelism = self.config.batch.parallelism,
            "Dispatching chunks"
        );

        let mut processed: ProcessedChunk = Vec::with_capacity(summary.rows_read);
        let mut results = stream::iter(chunks)
            .map(|chunk| {
                let engine = Arc::clone(&self.engine);
                tokio::task::spawn_blocking(move || process_chunk(&engine, chunk))
            })
            .buffered(self.config.batch.parallelism);

        while let Some(joined) = results.next().await {
            let chunk = joined.map_err(join_error)?;

            self.audit
                .log_batch(chunk.iter().map(|(id, p)| (id, p.flagged.as_slice())))
                .map_err(|e| RedactorError::Audit(format!("{e:#}")))?;

            for (record_id, record) in &chunk {
                summary.report.add_record(record_id, record);
            }
            processed.extend(chunk);
            log_chunk_processing!(processed.len(), summary.rows_read);

            if *self.shutdown_signal.borrow() {
                tracing::warn!(
                    processed = processed.len(),
                    total = summary.rows_read,
                    "Shutdown signal received, stopping after current chunk"
                );
                summary.interrupted = true;
                break;
            }
        }
        drop(results);

        if summary.report.undecodable_records > 0 {
            summary.report.add_warning(format!(
                "{} record(s) were not JSON objects and were passed through unchanged",
                summary.report.undecodable_records
            ));
        }
        if summary.interrupted {
            summary.report.add_warning(format!(
                "Run interrupted: {} row(s) were not processed",
                summary.rows_skipped()
            ));
        }

        if dry_run {
            tracing::info!("Dry run: no output written");
        } else {
            let output_path = PathBuf::from(&self.config.batch.output_path);
            let path = output_path.clone();
            summary.rows_written = tokio::task::spawn_blocking(move || {
                write_output(&path, processed.iter().map(|(id, p)| (id, p)))
            })
            .await
            .map_err(join_error)??;
            summary.output_path = Some(output_path);
        }

        let summary = summary.with_duration(start_time.elapsed());
        log_batch_complete!(
            summary.report.total_records,
            summary.report.records_with_pii,
            summary.duration
        );

        Ok(summary)
    }
}

fn process_chunk(engine: &RedactionEngine, chunk: Vec<SourceRow>) -> ProcessedChunk {
    chunk
        .into_iter()
        .map(|row| {
            let processed = engine.redact_raw(&row.data);
            (row.record_id, processed)
        })
        .collect()
}

fn join_error(err: JoinError) -> RedactorError {
    RedactorError::Other(format!("Worker task failed: {err}"))
}
