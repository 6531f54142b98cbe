use tracing::debug_span;

use super::config::TokenTables;

/// Per-call scan state. Lives only for one `convert` call.
struct Cursor {
    pos: usize,
    at_word_start: bool,
    prev_was_consonant: bool,
}

impl Cursor {
    fn advance(&mut self, len: usize, consonant: bool) {
        self.pos += len;
        self.at_word_start = false;
        self.prev_was_consonant = consonant;
    }
}

/// Romanized Hindi → Devanagari over a fixed set of token tables.
pub struct Transliterator<'a> {
    tables: &'a TokenTables,
}

impl<'a> Transliterator<'a> {
    pub fn new(tables: &'a TokenTables) -> Self {
        Self { tables }
    }

    /// Convert a phonetic Latin spelling into Devanagari.
    ///
    /// Input is trimmed, internal whitespace runs collapse to one space, and
    /// everything is lowercased. ASCII digits and characters outside `a`-`z`
    /// are copied through; letters no token covers are copied through too.
    /// Never fails.
    pub fn convert(&self, text: &str) -> String {
        let src = normalize(text);
        if src.is_empty() {
            return String::new();
        }
        let bytes = src.as_bytes();

        let mut out = String::with_capacity(src.len() * 3);
        let mut cur = Cursor {
            pos: 0,
            at_word_start: true,
            prev_was_consonant: false,
        };

        while let Some(ch) = src[cur.pos..].chars().next() {
            if ch == ' ' {
                out.push(' ');
                cur.pos += 1;
                cur.at_word_start = true;
                cur.prev_was_consonant = false;
                continue;
            }

            if !ch.is_ascii_lowercase() {
                // Digits, punctuation and non-Latin text pass through.
                out.push(ch);
                cur.advance(ch.len_utf8(), false);
                continue;
            }

            let rest = &bytes[cur.pos..];

            if let Some((len, forms)) = self.tables.match_vowel(rest) {
                if cur.at_word_start || !cur.prev_was_consonant {
                    out.push_str(&forms.independent);
                } else {
                    out.push_str(&forms.matra);
                }
                cur.advance(len, false);
                continue;
            }

            if let Some((len, glyph)) = self.tables.match_consonant(rest) {
                out.push_str(glyph);
                cur.advance(len, true);
                continue;
            }

            out.push(ch);
            cur.advance(1, false);
        }

        out
    }
}

/// Convert with the process-wide token tables.
pub fn roman_to_devanagari(text: &str) -> String {
    let _span = debug_span!("roman_to_devanagari", len = text.len()).entered();
    Transliterator::new(TokenTables::global()).convert(text)
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
