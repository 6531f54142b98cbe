//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! token tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub badge: BadgeSettings,
    pub sheet: SheetLayout,
    pub store: StoreSettings,
}

/// Fixed text printed on every badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeSettings {
    pub header_title: String,
    pub subheader: String,
    pub name_label: String,
    pub address_label: String,
    pub mobile_label: String,
    pub age_label: String,
    pub emergency_label: String,
    pub hypertension_flag: String,
    pub diabetes_flag: String,
    /// Printed in place of a missing address, age or phone number.
    pub placeholder: String,
}

/// Physical print layout in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub padding_mm: f64,
    pub gap_mm: f64,
    pub columns: usize,
    pub cards_per_page: usize,
    pub card_width_mm: f64,
    pub card_height_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
    Rest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// Snapshot file for the `file` backend.
    #[serde(default)]
    pub path: Option<String>,
    /// Base URL of the remote table service for the `rest` backend.
    #[serde(default)]
    pub url: Option<String>,
    pub table: String,
    /// Environment variable holding the remote API key.
    pub api_key_env: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must not be empty",
                ));
            }
        };
    }
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field > 0.0) {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be positive",
                ));
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be positive",
                ));
            }
        };
    }

    check_non_empty!(badge.header_title);
    check_non_empty!(badge.subheader);
    check_non_empty!(badge.name_label);
    check_non_empty!(badge.address_label);
    check_non_empty!(badge.mobile_label);
    check_non_empty!(badge.age_label);
    check_non_empty!(badge.emergency_label);
    check_non_empty!(badge.hypertension_flag);
    check_non_empty!(badge.diabetes_flag);

    check_positive!(sheet.page_width_mm);
    check_positive!(sheet.page_height_mm);
    check_positive!(sheet.card_width_mm);
    check_positive!(sheet.card_height_mm);
    check_positive_usize!(sheet.columns);
    check_positive_usize!(sheet.cards_per_page);
    if s.sheet.padding_mm < 0.0 || s.sheet.gap_mm < 0.0 {
        return Err(invalid("sheet.padding_mm/gap_mm", "must be non-negative"));
    }

    check_non_empty!(store.table);
    let has = |v: &Option<String>| v.as_deref().is_some_and(|v| !v.trim().is_empty());
    match s.store.backend {
        StoreBackend::File if !has(&s.store.path) => {
            return Err(invalid("store.path", "required for the file backend"));
        }
        StoreBackend::Rest if !has(&s.store.url) => {
            return Err(invalid("store.url", "required for the rest backend"));
        }
        _ => {}
    }

    Ok(())
}
