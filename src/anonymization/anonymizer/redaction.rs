//! Full redaction

/// Placeholder that replaces fully redacted values
pub const REDACTION_PLACEHOLDER: &str = "[REDACTED]";

/// Replace the whole value with [`REDACTION_PLACEHOLDER`]
pub fn redact(_value: &str) -> String {
    REDACTION_PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_discards_content() {
        assert_eq!(redact("192.168.0.12"), "[REDACTED]");
        assert_eq!(redact(""), "[REDACTED]");
        assert_eq!(redact("DEV-A7F3-99"), REDACTION_PLACEHOLDER);
    }
}
