//! Character-level Unicode classification for Hindi badge text.

/// Check the full Devanagari block (U+0900..U+097F). The block includes a few
/// Vedic signs and punctuation (। ॥) that never appear in registration data,
/// so the block-level check is preferred over enumerating letters.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Devanagari digits ० (U+0966) through ९ (U+096F).
pub fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whether the text is "already Hindi": at least one Devanagari codepoint.
pub fn has_devanagari(s: &str) -> bool {
    s.chars().any(is_devanagari)
}
