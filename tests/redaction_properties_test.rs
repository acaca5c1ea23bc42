//! Integration tests for detection and masking behaviour of the public API

use pii_redactor::anonymization::{
    detect_and_redact, DetectionSource, MaskingCategory, RedactionEngine,
};
use pii_redactor::domain::decode_record;
use serde_json::{json, Value};
use test_case::test_case;

fn redact(value: Value) -> (Value, bool) {
    let (out, pii) = detect_and_redact(&value.to_string());
    (serde_json::from_str(&out).expect("output is valid JSON"), pii)
}

#[test]
fn test_single_pattern_match_masks_only_that_field() {
    let (out, pii) = redact(json!({
        "phone": "9876543210",
        "name": "Asha",
        "city": "Pune",
        "age": 34
    }));

    assert!(pii);
    assert_eq!(
        out,
        json!({"phone": "XXXXXX3210", "name": "Asha", "city": "Pune", "age": 34})
    );
}

#[test]
fn test_name_and_email_combination() {
    let (out, pii) = redact(json!({
        "name": "Asha Rao",
        "email": "asha.rao@example.com",
        "city": "Pune"
    }));

    assert!(pii);
    assert_eq!(out["name"], "AXXa RXo");
    assert_eq!(out["email"], "ao@example.com");
    assert_eq!(out["city"], "Pune");
}

#[test]
fn test_single_token_name_does_not_count() {
    let (out, pii) = redact(json!({"name": "Asha", "email": "asha@example.com"}));

    assert!(!pii);
    assert_eq!(out, json!({"name": "Asha", "email": "asha@example.com"}));
}

#[test]
fn test_ip_and_device_only() {
    let (out, pii) = redact(json!({"ip_address": "10.1.2.3", "device_id": "dev-77"}));

    assert!(pii);
    assert_eq!(out, json!({"ip_address": "[REDACTED]", "device_id": "[REDACTED]"}));
}

#[test]
fn test_email_field_alone_is_not_pattern_matched() {
    let (out, pii) = redact(json!({"email": "asha@example.com"}));
    assert!(!pii);
    assert_eq!(out["email"], "asha@example.com");
}

#[test]
fn test_partial_pattern_does_not_flag() {
    let (_, pii) = redact(json!({"phone": "+91 9876543210"}));
    assert!(!pii);

    let (_, pii) = redact(json!({"passport": "k1234567"}));
    assert!(!pii);

    let (_, pii) = redact(json!({"aadhar": 123412341234u64}));
    assert!(!pii, "pattern rules only apply to strings");
}

#[test]
fn test_empty_quasi_identifiers_do_not_count() {
    let (_, pii) = redact(json!({
        "email": "",
        "address": null,
        "device_id": 0,
        "ip_address": "10.0.0.1"
    }));
    assert!(!pii);
}

#[test_case("9876543210", "XXXXXX3210" ; "ten digits")]
#[test_case("123412341234", "XXXXXXXX1234" ; "twelve digits")]
#[test_case("1234", "XXXX" ; "four characters")]
#[test_case("", "X" ; "empty")]
fn test_numeric_masking(input: &str, expected: &str) {
    assert_eq!(MaskingCategory::Numeric.mask(input), expected);
}

#[test_case("ab@example.com", "**@example.com" ; "two char local part")]
#[test_case("abc@example.com", "ac@example.com" ; "three char local part")]
#[test_case("asha@okaxis", "aa@okaxis" ; "upi handle")]
#[test_case("a@b@c", "**@b@c" ; "split at first at sign")]
fn test_email_masking(input: &str, expected: &str) {
    assert_eq!(MaskingCategory::EmailLike.mask(input), expected);
}

#[test_case("12 Main Street", "* MXXn SXXXXt" ; "address")]
#[test_case("Bo", "**" ; "short value")]
#[test_case("K1234567", "KXXXXXX7" ; "passport")]
fn test_token_masking(input: &str, expected: &str) {
    assert_eq!(MaskingCategory::TokenString.mask(input), expected);
}

#[test]
fn test_masking_is_deterministic_and_never_empty() {
    for category in [
        MaskingCategory::Numeric,
        MaskingCategory::TokenString,
        MaskingCategory::EmailLike,
        MaskingCategory::FullRedaction,
    ] {
        for input in ["", "a", "ab cd", "x@y", "9876543210"] {
            let first = category.mask(input);
            assert!(!first.is_empty());
            assert_eq!(first, category.mask(input));
        }
    }
}

#[test_case("{not json" ; "invalid json")]
#[test_case("[1, 2, 3]" ; "array")]
#[test_case("\"just a string\"" ; "string")]
#[test_case("" ; "empty input")]
fn test_malformed_input_passes_through(raw: &str) {
    assert_eq!(detect_and_redact(raw), (raw.to_string(), false));
}

#[test]
fn test_field_order_preserved() {
    let raw = r#"{"zeta":1,"phone":"9876543210","alpha":"x"}"#;
    let (out, pii) = detect_and_redact(raw);
    assert!(pii);
    assert_eq!(out, r#"{"zeta": 1, "phone": "XXXXXX3210", "alpha": "x"}"#);
}

#[test]
fn test_redact_record_reports_sources() {
    let record = decode_record(
        r#"{"upi_id":"asha@okaxis","name":"Asha Rao","address":"12 Main Street"}"#,
    )
    .expect("valid record");

    let outcome = RedactionEngine::new().redact_record(&record);
    assert!(outcome.pii_found);
    assert_eq!(outcome.total_flagged(), 3);

    let upi = outcome
        .flagged
        .iter()
        .find(|f| f.field == "upi_id")
        .expect("upi_id flagged");
    assert_eq!(upi.source, DetectionSource::Pattern);
    assert_eq!(upi.masked_value, "aa@okaxis");

    let name = outcome
        .flagged
        .iter()
        .find(|f| f.field == "name")
        .expect("name flagged");
    assert_eq!(name.source, DetectionSource::Combination);
    assert_eq!(name.category, MaskingCategory::TokenString);
}

#[test]
fn test_non_string_quasi_identifier_is_coerced() {
    let (out, pii) = redact(json!({"name": "Asha Rao", "device_id": 123456}));
    assert!(pii);
    assert_eq!(out["device_id"], "[REDACTED]");
    assert_eq!(out["name"], "AXXa RXo");
}

#[test]
fn test_output_uses_spaced_separators_and_ascii_escapes() {
    let (out, pii) = detect_and_redact(r#"{"phone": "9876543210", "city": "पुणे"}"#);
    assert!(pii);
    assert_eq!(
        out,
        r#"{"phone": "XXXXXX3210", "city": "\u092a\u0941\u0923\u0947"}"#
    );

    // Records without PII are re-encoded the same way
    let (out, pii) = detect_and_redact(r#"{"city":"Pune","pin":411001}"#);
    assert!(!pii);
    assert_eq!(out, r#"{"city": "Pune", "pin": 411001}"#);
}

#[test]
fn test_non_ascii_quasi_identifiers_are_masked_then_escaped() {
    let (out, pii) = detect_and_redact(r#"{"name": "José Núñez", "device_id": "d-9"}"#);
    assert!(pii);
    assert_eq!(
        out,
        r#"{"name": "JXX\u00e9 NXXXz", "device_id": "[REDACTED]"}"#
    );
}

#[test]
fn test_non_finite_numbers_make_record_undecodable() {
    // NaN and Infinity are not JSON, so the record passes through untouched
    let raw = r#"{"phone": "9876543210", "score": NaN}"#;
    assert_eq!(detect_and_redact(raw), (raw.to_string(), false));

    let raw = r#"{"phone": "9876543210", "score": -Infinity}"#;
    assert_eq!(detect_and_redact(raw), (raw.to_string(), false));
}

#[test]
fn test_non_ascii_digits_do_not_match_numeric_shapes() {
    let (out, pii) = redact(json!({"phone": "९८७६५४३२१०"}));
    assert!(!pii);
    assert_eq!(out["phone"], "९८७६५४३२१०");

    let (_, pii) = redact(json!({"aadhar": "१२३४१२३४१२३४"}));
    assert!(!pii);
}
