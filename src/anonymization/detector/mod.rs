//! PII detection module
//!
//! Provides the classifier interface and the two implementations that run
//! over every record: per-field shape matching and quasi-identifier
//! combinations. Both read the same original record; their detections are
//! merged before anything is masked.

pub mod combination;
pub mod field;
pub mod patterns;

use crate::anonymization::models::Detection;
use crate::domain::Record;

pub use combination::CombinationClassifier;
pub use field::FieldClassifier;

/// Trait for record classifier implementations
pub trait RecordClassifier: Send + Sync {
    /// Flag the fields of a record this classifier considers PII
    fn classify(&self, record: &Record) -> Vec<Detection>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Merge detections from several classifiers into one list in record order.
///
/// A field flagged more than once appears once, with its sources combined.
pub fn merge_detections(record: &Record, detections: Vec<Detection>) -> Vec<Detection> {
    let mut merged: Vec<Detection> = Vec::with_capacity(detections.len());

    for detection in detections {
        match merged.iter_mut().find(|d| d.field == detection.field) {
            Some(existing) => existing.source = existing.source.merge(detection.source),
            None => merged.push(detection),
        }
    }

    let position = |field: &str| record.keys().position(|k| k == field).unwrap_or(usize::MAX);
    merged.sort_by_key(|d| position(&d.field));
    merged
}
