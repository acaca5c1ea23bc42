//! Main redaction engine
//!
//! This module provides the [`RedactionEngine`] that runs both classifiers
//! over a record and masks every field either of them flagged.
//!
//! # Architecture
//!
//! - **Field classifier**: standalone shape rules keyed by field name
//! - **Combination classifier**: quasi-identifier cardinality threshold
//! - **Masking**: one strategy per [`MaskingCategory`](crate::anonymization::models::MaskingCategory)
//!
//! Both classifiers see the same original record, so masking applied for one
//! detection can never hide information the other classifier needed.
//!
//! # Examples
//!
//! ```
//! use pii_redactor::anonymization::detect_and_redact;
//!
//! let (redacted, pii_found) = detect_and_redact(r#"{"phone": "9876543210", "city": "Pune"}"#);
//! assert!(pii_found);
//! assert_eq!(redacted, r#"{"phone": "XXXXXX3210", "city": "Pune"}"#);
//!
//! // Malformed input passes through untouched
//! let (raw, pii_found) = detect_and_redact("{broken");
//! assert_eq!(raw, "{broken");
//! assert!(!pii_found);
//! ```

use crate::anonymization::{
    detector::{merge_detections, CombinationClassifier, FieldClassifier, RecordClassifier},
    models::{Detection, FlaggedField, RedactionOutcome},
};
use crate::domain::{decode_record, display_form, encode_record, Record};
use lazy_static::lazy_static;
use serde_json::Value;
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_ENGINE: RedactionEngine = RedactionEngine::new();
}

/// Result of processing one serialized record
#[derive(Debug, Clone)]
pub struct ProcessedRecord {
    /// Re-encoded redacted record, or the raw input if it could not be decoded
    pub output: String,
    /// True iff at least one field was flagged
    pub pii_found: bool,
    /// False when the input was not a decodable JSON object
    pub decoded: bool,
    /// Flagged fields in record order
    pub flagged: Vec<FlaggedField>,
}

impl ProcessedRecord {
    fn passthrough(raw: &str) -> Self {
        Self {
            output: raw.to_string(),
            pii_found: false,
            decoded: false,
            flagged: Vec::new(),
        }
    }
}

/// Detection-and-redaction engine
///
/// # Thread Safety
///
/// The engine holds no mutable state; share it across workers with `Arc`.
pub struct RedactionEngine {
    classifiers: Vec<Arc<dyn RecordClassifier>>,
}

impl RedactionEngine {
    /// Create an engine with the field and combination classifiers
    pub fn new() -> Self {
        Self::with_classifiers(vec![
            Arc::new(FieldClassifier::new()),
            Arc::new(CombinationClassifier::new()),
        ])
    }

    /// Create an engine with a custom classifier set
    pub fn with_classifiers(classifiers: Vec<Arc<dyn RecordClassifier>>) -> Self {
        Self { classifiers }
    }

    /// Run every classifier over the record and merge their detections
    pub fn detect(&self, record: &Record) -> Vec<Detection> {
        let detections = self
            .classifiers
            .iter()
            .flat_map(|classifier| {
                let found = classifier.classify(record);
                tracing::trace!(
                    classifier = classifier.name(),
                    flagged = found.len(),
                    "Classifier finished"
                );
                found
            })
            .collect();

        merge_detections(record, detections)
    }

    /// Detect and mask PII in a decoded record
    ///
    /// Unflagged fields are returned unchanged.
    pub fn redact_record(&self, record: &Record) -> RedactionOutcome {
        let detections = self.detect(record);
        if detections.is_empty() {
            return RedactionOutcome::clean(record.clone());
        }

        let mut redacted = record.clone();
        let mut flagged = Vec::with_capacity(detections.len());

        for detection in detections {
            let Some(slot) = redacted.get_mut(&detection.field) else {
                continue;
            };
            let original_value = display_form(slot);
            let masked_value = detection.category.mask(&original_value);
            *slot = Value::String(masked_value.clone());

            flagged.push(FlaggedField {
                field: detection.field,
                category: detection.category,
                source: detection.source,
                original_value,
                masked_value,
            });
        }

        RedactionOutcome {
            record: redacted,
            pii_found: !flagged.is_empty(),
            flagged,
        }
    }

    /// Decode, redact and re-encode one serialized record
    ///
    /// Input that is not a JSON object is returned verbatim with no PII found.
    pub fn redact_raw(&self, raw: &str) -> ProcessedRecord {
        let Some(record) = decode_record(raw) else {
            return ProcessedRecord::passthrough(raw);
        };

        let outcome = self.redact_record(&record);
        ProcessedRecord {
            output: encode_record(outcome.record),
            pii_found: outcome.pii_found,
            decoded: true,
            flagged: outcome.flagged,
        }
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect and redact PII in one serialized record.
///
/// Returns the re-encoded record and whether any PII was found. Malformed
/// input is returned unchanged with `false`.
pub fn detect_and_redact(raw: &str) -> (String, bool) {
    let processed = DEFAULT_ENGINE.redact_raw(raw);
    (processed.output, processed.pii_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::{DetectionSource, MaskingCategory};
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_single_pattern_match_masks_only_that_field() {
        let engine = RedactionEngine::new();
        let input = record(json!({
            "phone": "9876543210",
            "name": "Madonna",
            "order_value": 1299,
            "city": "Mumbai"
        }));

        let outcome = engine.redact_record(&input);

        assert!(outcome.pii_found);
        assert_eq!(outcome.total_flagged(), 1);
        assert_eq!(outcome.record["phone"], json!("XXXXXX3210"));
        assert_eq!(outcome.record["name"], input["name"]);
        assert_eq!(outcome.record["order_value"], input["order_value"]);
        assert_eq!(outcome.record["city"], input["city"]);
    }

    #[test]
    fn test_combination_without_pattern_match() {
        let engine = RedactionEngine::new();
        let input = record(json!({"name": "Priya Sharma", "email": "priya.s@example.com"}));

        let outcome = engine.redact_record(&input);

        assert!(outcome.pii_found);
        assert_eq!(outcome.record["name"], json!("PXXXa SXXXXa"));
        assert_eq!(outcome.record["email"], json!("ps@example.com"));
        assert!(outcome
            .flagged
            .iter()
            .all(|f| f.source == DetectionSource::Combination));
    }

    #[test]
    fn test_both_classifiers_contribute() {
        let engine = RedactionEngine::new();
        let input = record(json!({
            "aadhar": "123412341234",
            "ip_address": "10.1.2.3",
            "device_id": "DEV-77",
            "product": "kettle"
        }));

        let outcome = engine.redact_record(&input);

        assert_eq!(outcome.total_flagged(), 3);
        assert_eq!(outcome.record["aadhar"], json!("XXXXXXXX1234"));
        assert_eq!(outcome.record["ip_address"], json!("[REDACTED]"));
        assert_eq!(outcome.record["device_id"], json!("[REDACTED]"));
        assert_eq!(outcome.record["product"], json!("kettle"));
        assert_eq!(outcome.flagged[0].category, MaskingCategory::Numeric);
    }

    #[test]
    fn test_no_pii() {
        let engine = RedactionEngine::new();
        let input = record(json!({"name": "Madonna", "phone": "12345", "city": "Delhi"}));

        let outcome = engine.redact_record(&input);

        assert!(!outcome.pii_found);
        assert_eq!(outcome.record, input);
    }

    #[test]
    fn test_non_string_quasi_identifier_is_coerced() {
        let engine = RedactionEngine::new();
        let input = record(json!({"device_id": 4455667788u64, "ip_address": "10.0.0.1"}));

        let outcome = engine.redact_record(&input);
        assert_eq!(outcome.record["device_id"], json!("[REDACTED]"));
        assert_eq!(outcome.flagged[0].original_value, "4455667788");
    }

    #[test]
    fn test_redact_raw_preserves_order_and_passthrough() {
        let engine = RedactionEngine::new();

        let processed = engine.redact_raw(r#"{"id":7,"upi_id":"ravi@okicici","note":"hi"}"#);
        assert!(processed.decoded);
        assert!(processed.pii_found);
        assert_eq!(processed.output, r#"{"id": 7, "upi_id": "ri@okicici", "note": "hi"}"#);

        let processed = engine.redact_raw("not json at all");
        assert!(!processed.decoded);
        assert!(!processed.pii_found);
        assert_eq!(processed.output, "not json at all");
    }

    #[test]
    fn test_detect_and_redact_free_function() {
        let (output, found) = detect_and_redact(r#"{"ip_address":"1.2.3.4","device_id":"d-1"}"#);
        assert!(found);
        assert_eq!(output, r#"{"ip_address": "[REDACTED]", "device_id": "[REDACTED]"}"#);

        let (output, found) = detect_and_redact("[1,2,3]");
        assert!(!found);
        assert_eq!(output, "[1,2,3]");
    }
}
