pub(super) const DEFAULT_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default token tables as TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
