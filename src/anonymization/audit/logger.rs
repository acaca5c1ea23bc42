//! Audit logger for redaction operations

use crate::anonymization::models::FlaggedField;
use crate::domain::RecordId;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry for one PII-positive record
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    run_id: String,
    record_id: &'a str,
    flagged_count: usize,
    fields: Vec<AuditField>,
}

/// Audited field (with hashed value)
#[derive(Debug, Serialize)]
struct AuditField {
    field: String,
    category: String,
    source: String,
    /// SHA-256 hash of original value (never log plaintext PII)
    value_hash: String,
}

/// Audit logger for redaction operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
    run_id: Uuid,
}

impl AuditLogger {
    /// Create a new audit logger for one batch run
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
            run_id: Uuid::new_v4(),
        })
    }

    /// Identifier of the batch run written with every entry
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Log one redacted record
    pub fn log_redaction(&self, record_id: &RecordId, flagged: &[FlaggedField]) -> Result<()> {
        self.log_batch(std::iter::once((record_id, flagged)))
    }

    /// Log many redacted records with a single file open.
    ///
    /// Records without flagged fields are skipped.
    pub fn log_batch<'a, I>(&self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a RecordId, &'a [FlaggedField])>,
    {
        if !self.enabled {
            return Ok(());
        }

        let mut writer: Option<BufWriter<File>> = None;
        for (record_id, flagged) in records {
            if flagged.is_empty() {
                continue;
            }
            if writer.is_none() {
                writer = Some(BufWriter::new(self.open()?));
            }
            if let Some(w) = writer.as_mut() {
                let entry = self.create_entry(record_id, flagged);
                self.write_entry(w, &entry)?;
            }
        }

        if let Some(mut w) = writer {
            w.flush().context("Failed to flush audit log")?;
        }
        Ok(())
    }

    fn create_entry<'a>(&self, record_id: &'a RecordId, flagged: &[FlaggedField]) -> AuditLogEntry<'a> {
        AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            run_id: self.run_id.to_string(),
            record_id: record_id.as_str(),
            flagged_count: flagged.len(),
            fields: flagged
                .iter()
                .map(|f| AuditField {
                    field: f.field.clone(),
                    category: f.category.label().to_string(),
                    source: f.source.label().to_string(),
                    value_hash: hash_pii_value(&f.original_value),
                })
                .collect(),
        }
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))
    }

    fn write_entry(&self, out: &mut impl Write, entry: &AuditLogEntry<'_>) -> Result<()> {
        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(out, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let fields: Vec<String> = entry
                .fields
                .iter()
                .map(|f| format!("{}:{}", f.field, f.category))
                .collect();
            writeln!(
                out,
                "[{}] Run: {} | Record: {} | Flagged: {} | Fields: {}",
                entry.timestamp,
                entry.run_id,
                entry.record_id,
                entry.flagged_count,
                fields.join(",")
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::{DetectionSource, MaskingCategory};
    use tempfile::tempdir;

    fn phone_field() -> FlaggedField {
        FlaggedField {
            field: "phone".to_string(),
            category: MaskingCategory::Numeric,
            source: DetectionSource::Pattern,
            original_value: "9876543210".to_string(),
            masked_value: "XXXXXX3210".to_string(),
        }
    }

    #[test]
    fn test_hash_pii_value() {
        let hash1 = hash_pii_value("test@example.com");
        let hash2 = hash_pii_value("test@example.com");
        let hash3 = hash_pii_value("different@example.com");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_log_redaction_json() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit").join("redaction.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger
            .log_redaction(&RecordId::new("row-1"), &[phone_field()])
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("row-1"));
        assert!(content.contains("NUMERIC"));
        assert!(content.contains(&logger.run_id().to_string()));
        assert!(!content.contains("9876543210"));

        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["flagged_count"], 1);
        assert_eq!(entry["fields"][0]["field"], "phone");
    }

    #[test]
    fn test_log_batch_skips_clean_records_and_plain_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("redaction.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        let flagged = vec![phone_field()];
        let clean: Vec<FlaggedField> = Vec::new();
        let a = RecordId::new("a");
        let b = RecordId::new("b");
        logger
            .log_batch(vec![(&a, flagged.as_slice()), (&b, clean.as_slice())])
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("Record: a"));
        assert!(content.contains("phone:NUMERIC"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("redaction.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger
            .log_redaction(&RecordId::new("row-1"), &[phone_field()])
            .unwrap();
        assert!(!log_path.exists());
    }
}
