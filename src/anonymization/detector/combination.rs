//! Quasi-identifier combination classifier

use super::{patterns, RecordClassifier};
use crate::anonymization::models::{Detection, DetectionSource};
use crate::domain::{display_form, is_non_empty, Record};
use serde_json::Value;

/// Flags quasi-identifier fields when enough of them appear together.
///
/// Individually weak attributes (an email, an IP address) identify a person
/// only in combination, so a record is flagged when at least
/// [`patterns::COMBINATION_THRESHOLD`] distinct quasi-identifiers are present
/// and non-empty, even if no field has a standalone PII shape.
#[derive(Debug, Clone, Copy)]
pub struct CombinationClassifier {
    threshold: usize,
}

impl CombinationClassifier {
    /// Create a classifier with the fixed threshold
    pub fn new() -> Self {
        Self {
            threshold: patterns::COMBINATION_THRESHOLD,
        }
    }

    /// A `name` counts only as a full name: two or more whitespace-separated tokens.
    fn qualifies(field: &str, value: &Value) -> bool {
        if field == "name" && display_form(value).split_whitespace().count() < 2 {
            return false;
        }
        is_non_empty(value)
    }
}

impl Default for CombinationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordClassifier for CombinationClassifier {
    fn classify(&self, record: &Record) -> Vec<Detection> {
        let present: Vec<Detection> = record
            .iter()
            .filter_map(|(field, value)| {
                let rule = patterns::rule_for(field).filter(|r| r.quasi_identifier)?;
                Self::qualifies(field, value).then(|| {
                    Detection::new(field.clone(), rule.category, DetectionSource::Combination)
                })
            })
            .collect();

        if present.len() >= self.threshold {
            present
        } else {
            Vec::new()
        }
    }

    fn name(&self) -> &'static str {
        "combination"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flagged(value: serde_json::Value) -> Vec<String> {
        CombinationClassifier::new()
            .classify(value.as_object().unwrap())
            .into_iter()
            .map(|d| d.field)
            .collect()
    }

    #[test]
    fn test_full_name_and_email_reach_threshold() {
        let fields = flagged(json!({"name": "Asha Rao", "email": "asha@example.com"}));
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[test]
    fn test_single_token_name_does_not_count() {
        assert!(flagged(json!({"name": "Madonna", "email": "m@example.com"})).is_empty());
    }

    #[test]
    fn test_single_quasi_identifier_is_not_enough() {
        assert!(flagged(json!({"email": "asha@example.com", "city": "Pune"})).is_empty());
    }

    #[test]
    fn test_empty_values_do_not_count() {
        assert!(flagged(json!({"ip_address": "", "device_id": "DEV-1"})).is_empty());
        assert!(flagged(json!({"ip_address": null, "device_id": "DEV-1"})).is_empty());
        assert!(flagged(json!({"address": [], "device_id": "DEV-1"})).is_empty());
    }

    #[test]
    fn test_ip_and_device_only() {
        let fields = flagged(json!({"ip_address": "10.0.0.7", "device_id": "DEV-88", "x": 1}));
        assert_eq!(fields, vec!["ip_address", "device_id"]);
    }

    #[test]
    fn test_non_string_quasi_identifiers_count_when_non_empty() {
        let fields = flagged(json!({"device_id": 55012, "address": {"city": "Pune"}}));
        assert_eq!(fields, vec!["device_id", "address"]);
    }

    #[test]
    fn test_blank_name_does_not_count() {
        assert!(flagged(json!({"name": "   ", "email": "a@b.c"})).is_empty());
    }
}
