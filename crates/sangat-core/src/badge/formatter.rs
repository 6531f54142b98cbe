use crate::numeric::to_devanagari_digits;
use crate::translit::roman_to_devanagari;
use crate::unicode::has_devanagari;

/// Prepare free text for a badge.
///
/// Text that already contains Devanagari is kept as typed and only its digits
/// are converted. Anything else is transliterated first.
pub fn to_hindi_text(input: &str) -> String {
    let v = input.trim();
    if v.is_empty() {
        return String::new();
    }
    if has_devanagari(v) {
        return to_devanagari_digits(v);
    }
    to_devanagari_digits(&roman_to_devanagari(v))
}

/// Digits only; letters and punctuation pass through.
pub fn to_hindi_number(input: &str) -> String {
    to_devanagari_digits(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty() {
        assert_eq!(to_hindi_text(""), "");
        assert_eq!(to_hindi_text("   "), "");
    }

    #[test]
    fn roman_name() {
        assert_eq!(to_hindi_text("Ram Singh"), "रम सिनघ");
        assert_eq!(to_hindi_text("  Kamal "), "कमल");
    }

    #[test]
    fn devanagari_kept_digits_converted() {
        assert_eq!(to_hindi_text("उम्र 60"), "उम्र ६०");
        assert_eq!(to_hindi_text("राम"), "राम");
    }

    #[test]
    fn mixed_roman_text_with_digits() {
        assert_eq!(to_hindi_text("ward 12"), "वरद १२");
    }

    #[test]
    fn placeholder_passes_through() {
        assert_eq!(to_hindi_text("-"), "-");
    }

    #[test]
    fn numbers() {
        assert_eq!(to_hindi_number("65"), "६५");
        assert_eq!(to_hindi_number("9123456780/9988776655"), "९१२३४५६७८०/९९८८७७६६५५");
        assert_eq!(to_hindi_number("-"), "-");
    }
}
