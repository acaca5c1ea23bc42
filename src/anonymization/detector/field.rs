//! Standalone field classifier

use super::{patterns, RecordClassifier};
use crate::anonymization::models::{Detection, DetectionSource};
use crate::domain::Record;
use serde_json::Value;

/// Flags fields whose value, on its own, has a known PII shape.
///
/// Only string values of fields with a shape rule are checked; each field is
/// evaluated independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldClassifier;

impl FieldClassifier {
    /// Create a new field classifier
    pub fn new() -> Self {
        Self
    }
}

impl RecordClassifier for FieldClassifier {
    fn classify(&self, record: &Record) -> Vec<Detection> {
        record
            .iter()
            .filter_map(|(field, value)| {
                let rule = patterns::rule_for(field)?;
                let shape = rule.shape?;
                let Value::String(text) = value else {
                    return None;
                };
                shape
                    .matches(text)
                    .then(|| Detection::new(field.clone(), rule.category, DetectionSource::Pattern))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "field"
    }
}
