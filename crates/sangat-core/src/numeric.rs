//! Digit transliteration between ASCII and Devanagari numerals.
//!
//! Ages, phone numbers and ids are printed on badges with Devanagari digits
//! (० १ २ ३ ४ ५ ६ ७ ८ ९). Only the ten digit characters are touched; every
//! other character keeps its position.

const DEVANAGARI_ZERO: u32 = 0x0966;

/// Replace each ASCII digit with its Devanagari counterpart.
///
/// Idempotent: Devanagari digits are not ASCII digits, so a second pass is a
/// no-op. The character count never changes.
pub fn to_devanagari_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(DEVANAGARI_ZERO + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Replace each Devanagari digit with its ASCII counterpart.
pub fn from_devanagari_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if crate::unicode::is_devanagari_digit(c) {
                char::from_u32('0' as u32 + (c as u32 - DEVANAGARI_ZERO)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Group an Aadhaar number into blocks of four: "123456789012" → "1234 5678 9012".
pub fn format_aadhaar(aadhaar: &str) -> String {
    let mut out = String::with_capacity(aadhaar.len() + aadhaar.len() / 4);
    let mut run = 0;
    for c in aadhaar.chars() {
        out.push(c);
        if c.is_ascii_digit() {
            run += 1;
            if run == 4 {
                out.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    out.trim().to_string()
}
