//! Numeric masking: trailing digits stay visible

use super::MASK_CHAR;

/// Number of trailing characters left visible
pub const VISIBLE_DIGITS: usize = 4;

/// Mask all but the last [`VISIBLE_DIGITS`] characters.
///
/// Values of [`VISIBLE_DIGITS`] characters or fewer are masked completely;
/// an empty value becomes a single mask character.
pub fn mask_number(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= VISIBLE_DIGITS {
        let len = chars.len().max(1);
        return std::iter::repeat(MASK_CHAR).take(len).collect();
    }

    let hidden = chars.len() - VISIBLE_DIGITS;
    std::iter::repeat(MASK_CHAR)
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}
