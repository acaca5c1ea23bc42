//! Email and UPI ID masking

use super::token::mask_tokens;

/// Replacement for local parts of two characters or fewer
pub const SHORT_LOCAL_MASK: &str = "**";

/// Shorten the local part of `local@domain` and keep the domain.
///
/// A local part longer than two characters becomes its first and last
/// character with nothing between them. Shorter local parts become
/// [`SHORT_LOCAL_MASK`]. Only the first `@` splits; values without one fall
/// back to [`mask_tokens`].
pub fn mask_email(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return mask_tokens(value);
    };

    let chars: Vec<char> = local.chars().collect();
    let masked_local = match chars.as_slice() {
        [first, interior @ .., last] if !interior.is_empty() => format!("{first}{last}"),
        _ => SHORT_LOCAL_MASK.to_string(),
    };

    format!("{masked_local}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("asha.rao@example.com", "ao@example.com" ; "email")]
    #[test_case("ravi@okhdfcbank", "ri@okhdfcbank" ; "upi handle")]
    #[test_case("abc@example.com", "ac@example.com" ; "three char local")]
    #[test_case("ab@example.com", "**@example.com" ; "two char local")]
    #[test_case("a@x", "**@x" ; "one char local")]
    #[test_case("@example.com", "**@example.com" ; "empty local")]
    #[test_case("user@a@b", "ur@a@b" ; "splits at first at sign")]
    #[test_case("no at sign here", "* * sXXn hXXe" ; "falls back to tokens")]
    #[test_case("x", "**" ; "short fallback")]
    fn test_mask_email(input: &str, expected: &str) {
        assert_eq!(mask_email(input), expected);
    }
}
