//! Masking strategies
//!
//! Each [`MaskingCategory`] maps to one strategy. Strategies are total: any
//! input, including empty strings, produces a non-empty mask.

pub mod email;
pub mod numeric;
pub mod redaction;
pub mod token;

use crate::anonymization::models::MaskingCategory;
use crate::domain::display_form;
use serde_json::Value;

pub use email::mask_email;
pub use numeric::mask_number;
pub use redaction::{redact, REDACTION_PLACEHOLDER};
pub use token::mask_tokens;

/// Character that replaces hidden characters
pub const MASK_CHAR: char = 'X';

impl MaskingCategory {
    /// Mask a string value with this category's strategy
    pub fn mask(&self, value: &str) -> String {
        match self {
            Self::Numeric => mask_number(value),
            Self::TokenString => mask_tokens(value),
            Self::EmailLike => mask_email(value),
            Self::FullRedaction => redact(value),
        }
    }

    /// Mask any JSON value, coercing non-strings to their display form first
    pub fn mask_value(&self, value: &Value) -> String {
        self.mask(&display_form(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(MaskingCategory::Numeric, "9876543210", "XXXXXX3210" ; "numeric")]
    #[test_case(MaskingCategory::TokenString, "Asha Rao", "AXXa RXo" ; "token string")]
    #[test_case(MaskingCategory::EmailLike, "asha.rao@example.com", "ao@example.com" ; "email like")]
    #[test_case(MaskingCategory::FullRedaction, "192.168.1.4", "[REDACTED]" ; "full redaction")]
    fn test_dispatch(category: MaskingCategory, input: &str, expected: &str) {
        assert_eq!(category.mask(input), expected);
    }

    #[test]
    fn test_mask_value_coerces_non_strings() {
        assert_eq!(
            MaskingCategory::Numeric.mask_value(&json!(9876543210u64)),
            "XXXXXX3210"
        );
        assert_eq!(MaskingCategory::TokenString.mask_value(&json!(true)), "tXXe");
        assert_eq!(MaskingCategory::TokenString.mask_value(&json!(null)), "nXXl");
        assert_eq!(
            MaskingCategory::FullRedaction.mask_value(&json!({"mac": "aa:bb"})),
            REDACTION_PLACEHOLDER
        );
    }

    #[test]
    fn test_never_empty() {
        for category in [
            MaskingCategory::Numeric,
            MaskingCategory::TokenString,
            MaskingCategory::EmailLike,
            MaskingCategory::FullRedaction,
        ] {
            for input in ["", " ", "a", "    ", "@"] {
                assert!(!category.mask(input).is_empty(), "{category:?} on {input:?}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let first = MaskingCategory::EmailLike.mask("priya@upi");
        let second = MaskingCategory::EmailLike.mask("priya@upi");
        assert_eq!(first, second);
    }
}
