//! Detection data models

use crate::domain::Record;
use serde::{Deserialize, Serialize};

/// Masking category of a flagged field
///
/// Every field covered by a detection rule maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskingCategory {
    /// Last four characters visible (phone, national ID)
    Numeric,
    /// First and last character of each token visible (passport, name, address)
    TokenString,
    /// Shortened local part, domain visible (UPI ID, email)
    EmailLike,
    /// Whole value replaced by a placeholder (IP address, device ID)
    FullRedaction,
}

impl MaskingCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Numeric => "NUMERIC",
            Self::TokenString => "TOKEN_STRING",
            Self::EmailLike => "EMAIL_LIKE",
            Self::FullRedaction => "FULL_REDACTION",
        }
    }
}

/// Which classifier flagged a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// Value fully matched the shape rule for its field name
    Pattern,
    /// Field is part of a quasi-identifier combination
    Combination,
    /// Both classifiers flagged the field
    Both,
}

impl DetectionSource {
    /// Combine the sources of two detections of the same field
    pub fn merge(self, other: DetectionSource) -> DetectionSource {
        if self == other {
            self
        } else {
            DetectionSource::Both
        }
    }

    /// Get human-readable label for the source
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Combination => "combination",
            Self::Both => "both",
        }
    }
}

/// A field flagged by a classifier, before masking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Field name in the record
    pub field: String,
    /// Masking category of the field
    pub category: MaskingCategory,
    /// Classifier that produced the detection
    pub source: DetectionSource,
}

impl Detection {
    /// Create a new detection
    pub fn new(field: impl Into<String>, category: MaskingCategory, source: DetectionSource) -> Self {
        Self {
            field: field.into(),
            category,
            source,
        }
    }
}

/// A flagged field after masking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedField {
    /// Field name in the record
    pub field: String,
    /// Masking category applied
    pub category: MaskingCategory,
    /// Classifier(s) that flagged the field
    pub source: DetectionSource,
    /// Display form of the original value (hashed in audit logs, never serialized)
    #[serde(skip)]
    pub original_value: String,
    /// Masked replacement value
    pub masked_value: String,
}

/// Result of running detection and masking over one record
#[derive(Debug, Clone)]
pub struct RedactionOutcome {
    /// Record with flagged fields masked; unflagged fields untouched
    pub record: Record,
    /// True iff at least one field was flagged
    pub pii_found: bool,
    /// Flagged fields in record order
    pub flagged: Vec<FlaggedField>,
}

impl RedactionOutcome {
    /// Outcome for a record with nothing flagged
    pub fn clean(record: Record) -> Self {
        Self {
            record,
            pii_found: false,
            flagged: Vec::new(),
        }
    }

    /// Number of flagged fields
    pub fn total_flagged(&self) -> usize {
        self.flagged.len()
    }

    /// Check whether a given field was flagged
    pub fn is_flagged(&self, field: &str) -> bool {
        self.flagged.iter().any(|f| f.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_merge() {
        use DetectionSource::*;
        assert_eq!(Pattern.merge(Pattern), Pattern);
        assert_eq!(Combination.merge(Combination), Combination);
        assert_eq!(Pattern.merge(Combination), Both);
        assert_eq!(Both.merge(Pattern), Both);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&MaskingCategory::FullRedaction).unwrap();
        assert_eq!(json, "\"full_redaction\"");
        assert_eq!(MaskingCategory::EmailLike.label(), "EMAIL_LIKE");
    }

    #[test]
    fn test_flagged_field_never_serializes_original() {
        let field = FlaggedField {
            field: "phone".to_string(),
            category: MaskingCategory::Numeric,
            source: DetectionSource::Pattern,
            original_value: "9876543210".to_string(),
            masked_value: "XXXXXX3210".to_string(),
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(!json.contains("9876543210"));
        assert!(json.contains("XXXXXX3210"));
    }

    #[test]
    fn test_clean_outcome() {
        let outcome = RedactionOutcome::clean(Record::new());
        assert!(!outcome.pii_found);
        assert_eq!(outcome.total_flagged(), 0);
        assert!(!outcome.is_flagged("phone"));
    }
}
