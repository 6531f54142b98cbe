use sangat_core::badge::{to_hindi_number, to_hindi_text};
use sangat_core::translit::roman_to_devanagari;

pub fn translit(text: &str) {
    println!("{}", roman_to_devanagari(text));
}

pub fn hindi(text: &str) {
    println!("{}", to_hindi_text(text));
}

pub fn digits(text: &str) {
    println!("{}", to_hindi_number(text));
}
