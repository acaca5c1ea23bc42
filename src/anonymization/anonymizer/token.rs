//! Token-wise string masking for names, addresses and passport numbers

use super::MASK_CHAR;

/// Replacement for values too short to mask token by token
pub const SHORT_VALUE_MASK: &str = "**";

/// Replacement for tokens of two characters or fewer
pub const SHORT_TOKEN_MASK: &str = "*";

const MIN_VALUE_LEN: usize = 4;

/// Mask each whitespace-separated token, keeping its first and last character.
///
/// Tokens of two characters or fewer collapse to [`SHORT_TOKEN_MASK`]. Values
/// shorter than four characters, or with no tokens at all, collapse to
/// [`SHORT_VALUE_MASK`]. Tokens are rejoined with a single space.
pub fn mask_tokens(value: &str) -> String {
    if value.chars().count() < MIN_VALUE_LEN {
        return SHORT_VALUE_MASK.to_string();
    }

    let masked: Vec<String> = value.split_whitespace().map(mask_token).collect();
    if masked.is_empty() {
        return SHORT_VALUE_MASK.to_string();
    }
    masked.join(" ")
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [first, interior @ .., last] if !interior.is_empty() => {
            let mut out = String::with_capacity(token.len());
            out.push(*first);
            out.extend(std::iter::repeat(MASK_CHAR).take(interior.len()));
            out.push(*last);
            out
        }
        _ => SHORT_TOKEN_MASK.to_string(),
    }
}
