//! Rule tables for PII detection
//!
//! The tables are static: which fields carry a shape rule, which fields
//! belong to the quasi-identifier vocabulary, and how every covered field is
//! masked. Both classifiers and the masking engine read from here.

use crate::anonymization::models::MaskingCategory;
use lazy_static::lazy_static;
use regex::Regex;

/// Number of distinct quasi-identifiers that makes a record identifying
pub const COMBINATION_THRESHOLD: usize = 2;

lazy_static! {
    // Anchored on both ends: a shape only counts when it covers the whole value.
    static ref PHONE_REGEX: Regex = Regex::new(r"\A[0-9]{10}\z").unwrap();

    static ref NATIONAL_ID_REGEX: Regex = Regex::new(r"\A[0-9]{12}\z").unwrap();

    static ref PASSPORT_REGEX: Regex = Regex::new(r"\A[A-Z][0-9]{7}\z").unwrap();

    // Broad local@domain shape; plain email addresses match too.
    static ref UPI_ID_REGEX: Regex = Regex::new(r"\A[\w.-]+@[\w.-]+\z").unwrap();
}

/// Shape a standalone PII value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRule {
    /// Exactly 10 decimal digits
    Phone,
    /// Exactly 12 decimal digits
    NationalId,
    /// One uppercase ASCII letter followed by 7 decimal digits
    Passport,
    /// `local@domain` of word characters, dots and hyphens
    UpiId,
}

impl ShapeRule {
    fn regex(&self) -> &'static Regex {
        match self {
            Self::Phone => &PHONE_REGEX,
            Self::NationalId => &NATIONAL_ID_REGEX,
            Self::Passport => &PASSPORT_REGEX,
            Self::UpiId => &UPI_ID_REGEX,
        }
    }

    /// Full-string match of the value against the shape
    pub fn matches(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

/// Detection and masking rule for one well-known field name
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name the rule is keyed by
    pub field: &'static str,
    /// Standalone shape rule, if the field is checked on its own
    pub shape: Option<ShapeRule>,
    /// Whether the field counts toward quasi-identifier combinations
    pub quasi_identifier: bool,
    /// How the field is masked once flagged
    pub category: MaskingCategory,
}

/// Every field either classifier looks at, in vocabulary order
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "phone",
        shape: Some(ShapeRule::Phone),
        quasi_identifier: false,
        category: MaskingCategory::Numeric,
    },
    FieldRule {
        field: "aadhar",
        shape: Some(ShapeRule::NationalId),
        quasi_identifier: false,
        category: MaskingCategory::Numeric,
    },
    FieldRule {
        field: "passport",
        shape: Some(ShapeRule::Passport),
        quasi_identifier: false,
        category: MaskingCategory::TokenString,
    },
    FieldRule {
        field: "upi_id",
        shape: Some(ShapeRule::UpiId),
        quasi_identifier: false,
        category: MaskingCategory::EmailLike,
    },
    FieldRule {
        field: "name",
        shape: None,
        quasi_identifier: true,
        category: MaskingCategory::TokenString,
    },
    FieldRule {
        field: "email",
        shape: None,
        quasi_identifier: true,
        category: MaskingCategory::EmailLike,
    },
    FieldRule {
        field: "address",
        shape: None,
        quasi_identifier: true,
        category: MaskingCategory::TokenString,
    },
    FieldRule {
        field: "ip_address",
        shape: None,
        quasi_identifier: true,
        category: MaskingCategory::FullRedaction,
    },
    FieldRule {
        field: "device_id",
        shape: None,
        quasi_identifier: true,
        category: MaskingCategory::FullRedaction,
    },
];

/// Look up the rule for a field name
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}

/// Masking category for a field name, if any rule covers it
pub fn category_for(field: &str) -> Option<MaskingCategory> {
    rule_for(field).map(|rule| rule.category)
}

/// Quasi-identifier vocabulary in order
pub fn quasi_identifiers() -> impl Iterator<Item = &'static str> {
    FIELD_RULES
        .iter()
        .filter(|rule| rule.quasi_identifier)
        .map(|rule| rule.field)
}
