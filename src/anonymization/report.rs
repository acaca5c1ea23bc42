//! Batch reporting for redaction runs
//!
//! This module provides a summary of a batch run: how many records carried
//! PII, which categories and classifiers flagged fields, and a handful of
//! sample masked values. Original values are never kept in the report.

use crate::anonymization::engine::ProcessedRecord;
use crate::anonymization::models::{DetectionSource, MaskingCategory};
use crate::domain::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_SAMPLES: usize = 20;
const SAMPLES_PER_RECORD: usize = 3;

/// Batch report with PII detection statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Batch run identifier
    pub run_id: Option<String>,

    /// Whether the run wrote no output
    pub dry_run: bool,

    /// Total records processed
    pub total_records: usize,

    /// Records with at least one flagged field
    pub records_with_pii: usize,

    /// Records with nothing flagged (includes undecodable records)
    pub records_without_pii: usize,

    /// Records passed through because they were not a JSON object
    pub undecodable_records: usize,

    /// Total flagged fields
    pub total_flagged_fields: usize,

    /// Flagged fields by masking category
    pub flagged_by_category: BTreeMap<MaskingCategory, usize>,

    /// Flagged fields by detection source
    pub flagged_by_source: BTreeMap<DetectionSource, usize>,

    /// Flagged fields by field name
    pub flagged_by_field: BTreeMap<String, usize>,

    /// Sample masked values
    pub samples: Vec<RedactionSample>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

/// Sample masked value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSample {
    /// Record the sample came from
    pub record_id: String,

    /// Field name
    pub field: String,

    /// Masking category applied
    pub category: MaskingCategory,

    /// Classifier(s) that flagged the field
    pub source: DetectionSource,

    /// Masked value
    pub masked: String,
}

impl BatchReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            run_id: None,
            dry_run: false,
            total_records: 0,
            records_with_pii: 0,
            records_without_pii: 0,
            undecodable_records: 0,
            total_flagged_fields: 0,
            flagged_by_category: BTreeMap::new(),
            flagged_by_source: BTreeMap::new(),
            flagged_by_field: BTreeMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Add the outcome of one record
    pub fn add_record(&mut self, record_id: &RecordId, processed: &ProcessedRecord) {
        self.total_records += 1;

        if !processed.decoded {
            self.undecodable_records += 1;
        }

        if !processed.pii_found {
            self.records_without_pii += 1;
            return;
        }

        self.records_with_pii += 1;
        self.total_flagged_fields += processed.flagged.len();

        for field in &processed.flagged {
            *self.flagged_by_category.entry(field.category).or_insert(0) += 1;
            *self.flagged_by_source.entry(field.source).or_insert(0) += 1;
            *self
                .flagged_by_field
                .entry(field.field.clone())
                .or_insert(0) += 1;
        }

        for field in processed.flagged.iter().take(SAMPLES_PER_RECORD) {
            if self.samples.len() >= MAX_SAMPLES {
                break;
            }
            self.samples.push(RedactionSample {
                record_id: record_id.to_string(),
                field: field.field.clone(),
                category: field.category,
                source: field.source,
                masked: field.masked_value.clone(),
            });
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Share of records with PII, as a percentage
    pub fn pii_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        (self.records_with_pii as f64 / self.total_records as f64) * 100.0
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if self.dry_run {
            output.push_str("                  PII REDACTION DRY-RUN REPORT                 \n");
        } else {
            output.push_str("                      PII REDACTION REPORT                     \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        if let Some(ref run_id) = self.run_id {
            output.push_str(&format!("  Run ID:                      {run_id}\n"));
        }
        output.push_str(&format!(
            "  Total Records Processed:     {}\n",
            self.total_records
        ));
        output.push_str(&format!(
            "  Records with PII:            {} ({:.2}%)\n",
            self.records_with_pii,
            self.pii_rate()
        ));
        output.push_str(&format!(
            "  Records without PII:         {}\n",
            self.records_without_pii
        ));
        output.push_str(&format!(
            "  Undecodable Records:         {}\n",
            self.undecodable_records
        ));
        output.push_str(&format!(
            "  Total Fields Masked:         {}\n",
            self.total_flagged_fields
        ));
        output.push_str(&format!(
            "  Duration:                    {} ms\n",
            self.duration_ms
        ));
        output.push('\n');

        if !self.flagged_by_category.is_empty() {
            output.push_str("🔍 MASKED FIELDS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (category, count) in &self.flagged_by_category {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');

            output.push_str("🧭 MASKED FIELDS BY SOURCE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (source, count) in &self.flagged_by_source {
                output.push_str(&format!("  {:30} {:>5}\n", source.label(), count));
            }
            output.push('\n');

            output.push_str("🏷️  MASKED FIELDS BY NAME\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            let mut fields: Vec<_> = self.flagged_by_field.iter().collect();
            fields.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (field, count) in fields {
                output.push_str(&format!("  {:30} {:>5}\n", field, count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE MASKED VALUES\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Record:    {}\n", sample.record_id));
                output.push_str(&format!("    Field:     {}\n", sample.field));
                output.push_str(&format!("    Category:  {}\n", sample.category.label()));
                output.push_str(&format!("    Source:    {}\n", sample.source.label()));
                output.push_str(&format!("    Masked:    \"{}\"\n", sample.masked));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}
