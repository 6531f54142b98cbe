//! Property-based tests for the transliteration core.

use proptest::prelude::*;

use crate::badge::to_hindi_text;
use crate::numeric::{from_devanagari_digits, to_devanagari_digits};
use crate::translit::roman_to_devanagari;

const INDEPENDENT_VOWELS: [char; 11] = [
    'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ए', 'ऐ', 'ओ', 'औ', 'ऋ',
];

proptest! {
    #[test]
    fn digit_conversion_is_idempotent(s in any::<String>()) {
        let once = to_devanagari_digits(&s);
        prop_assert_eq!(to_devanagari_digits(&once), once.clone());
        prop_assert_eq!(once.chars().count(), s.chars().count());
    }

    #[test]
    fn digit_conversion_keeps_every_other_char_in_place(s in any::<String>()) {
        let out = to_devanagari_digits(&s);
        for (before, after) in s.chars().zip(out.chars()) {
            match before.to_digit(10) {
                Some(d) => prop_assert_eq!(after as u32, 0x0966 + d),
                None => prop_assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn digit_conversion_round_trips_ascii_digits(s in "[0-9 /-]{0,24}") {
        prop_assert_eq!(from_devanagari_digits(&to_devanagari_digits(&s)), s);
    }

    #[test]
    fn converter_leaves_only_unmatched_c(s in "[a-zA-Z ]{0,40}") {
        let out = roman_to_devanagari(&s);
        prop_assert!(out
            .chars()
            .all(|c| !c.is_ascii_alphabetic() || c == 'c'));
    }

    #[test]
    fn whitespace_only_is_empty(s in "[ \t\n]{0,10}") {
        prop_assert_eq!(roman_to_devanagari(&s), "");
        prop_assert_eq!(to_hindi_text(&s), "");
    }

    #[test]
    fn word_count_survives(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let input = words.join("   ");
        let out = roman_to_devanagari(&input);
        prop_assert_eq!(out.split(' ').count(), words.len());
    }

    #[test]
    fn leading_vowel_is_independent(s in "[aeiou][a-z]{0,10}") {
        let out = roman_to_devanagari(&s);
        let first = out.chars().next();
        prop_assert!(first.is_some_and(|c| INDEPENDENT_VOWELS.contains(&c)), "{:?}", out);
    }

    #[test]
    fn devanagari_input_only_changes_digits(s in "[राम सिंह]{1,10}[0-9]{0,4}") {
        let out = to_hindi_text(&s);
        prop_assert_eq!(from_devanagari_digits(&out), s.trim());
    }
}
