use std::cmp::Reverse;
use std::sync::OnceLock;

use serde::Deserialize;

use super::table::DEFAULT_TOML;
use super::trie::TokenTrie;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The two renderings of a vowel token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VowelForms {
    /// Letter used at word start or after a non-consonant.
    pub independent: String,
    /// Sign attached to a preceding consonant. Empty for the inherent "a".
    #[serde(default)]
    pub matra: String,
}

/// Raw sections. `toml::Table` keeps declaration order, which decides
/// same-length ties after sorting.
#[derive(Deserialize)]
struct TablesConfig {
    vowels: toml::Table,
    consonants: toml::Table,
}

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid token in [{table}]: {token:?} (expected lowercase a-z)")]
    InvalidToken { table: &'static str, token: String },
    #[error("empty output for [{table}] token: {token}")]
    EmptyValue { table: &'static str, token: String },
    #[error("token tables already initialized")]
    AlreadyInitialized,
}

/// Vowel and consonant token tables, ordered longest token first.
#[derive(Debug)]
pub struct TokenTables {
    vowels: Vec<(String, VowelForms)>,
    consonants: Vec<(String, String)>,
    vowel_trie: TokenTrie<usize>,
    consonant_trie: TokenTrie<usize>,
}

impl TokenTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TablesError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TablesError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static TokenTables {
        static INSTANCE: OnceLock<TokenTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_tables_toml(toml_str).expect("token tables TOML must be valid")
        })
    }

    fn build(
        mut vowels: Vec<(String, VowelForms)>,
        mut consonants: Vec<(String, String)>,
    ) -> Self {
        // Stable sort keeps same-length tokens in declaration order.
        vowels.sort_by_key(|(token, _)| Reverse(token.len()));
        consonants.sort_by_key(|(token, _)| Reverse(token.len()));

        let mut vowel_trie = TokenTrie::new();
        for (i, (token, _)) in vowels.iter().enumerate() {
            vowel_trie.insert(token, i);
        }
        let mut consonant_trie = TokenTrie::new();
        for (i, (token, _)) in consonants.iter().enumerate() {
            consonant_trie.insert(token, i);
        }

        Self {
            vowels,
            consonants,
            vowel_trie,
            consonant_trie,
        }
    }

    /// Vowel entries, longest token first.
    pub fn vowels(&self) -> &[(String, VowelForms)] {
        &self.vowels
    }

    /// Consonant entries, longest token first.
    pub fn consonants(&self) -> &[(String, String)] {
        &self.consonants
    }

    /// Longest vowel token prefixing `input`, with its byte length.
    pub fn match_vowel(&self, input: &[u8]) -> Option<(usize, &VowelForms)> {
        self.vowel_trie
            .longest_match(input)
            .map(|(len, &i)| (len, &self.vowels[i].1))
    }

    /// Longest consonant token prefixing `input`, with its byte length.
    pub fn match_consonant(&self, input: &[u8]) -> Option<(usize, &str)> {
        self.consonant_trie
            .longest_match(input)
            .map(|(len, &i)| (len, self.consonants[i].1.as_str()))
    }
}

/// Parse and validate token tables from TOML text.
pub fn parse_tables_toml(toml_str: &str) -> Result<TokenTables, TablesError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    if config.vowels.is_empty() {
        return Err(TablesError::Empty("vowels"));
    }
    if config.consonants.is_empty() {
        return Err(TablesError::Empty("consonants"));
    }

    let mut vowels = Vec::with_capacity(config.vowels.len());
    for (token, value) in config.vowels {
        check_token("vowels", &token)?;
        let forms: VowelForms = value
            .try_into()
            .map_err(|e: toml::de::Error| {
                TablesError::Parse(format!("vowels.{token}: {e}"))
            })?;
        if forms.independent.is_empty() {
            return Err(TablesError::EmptyValue {
                table: "vowels",
                token,
            });
        }
        vowels.push((token, forms));
    }
    let mut consonants = Vec::with_capacity(config.consonants.len());
    for (token, value) in config.consonants {
        check_token("consonants", &token)?;
        let out: String = value
            .try_into()
            .map_err(|e: toml::de::Error| {
                TablesError::Parse(format!("consonants.{token}: {e}"))
            })?;
        if out.is_empty() {
            return Err(TablesError::EmptyValue {
                table: "consonants",
                token,
            });
        }
        consonants.push((token, out));
    }

    Ok(TokenTables::build(vowels, consonants))
}

fn check_token(table: &'static str, token: &str) -> Result<(), TablesError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(TablesError::InvalidToken {
            table,
            token: token.to_string(),
        });
    }
    Ok(())
}
