//! Romanized Hindi to Devanagari conversion.
//!
//! Greedy longest-match tokenizer over a vowel table and a consonant table,
//! with independent-vowel vs. matra composition. Tables are loaded once from
//! TOML (embedded default or a custom file registered before first use).

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_tables_toml, TablesError, TokenTables, VowelForms};
pub use convert::{roman_to_devanagari, Transliterator};
pub use table::default_toml;
pub use trie::TokenTrie;
