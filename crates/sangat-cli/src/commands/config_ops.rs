use std::fs;

use sangat_core::settings::{self, StoreBackend};
use sangat_core::translit::{self, TokenTables};

/// Install custom settings and token tables before anything reads the globals.
pub fn load_overrides(settings_file: Option<&str>, tables_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = tables_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(TokenTables::init_custom(content), "Error in {file}: {}");
    }
}

pub fn tables_export() {
    print!("{}", translit::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(translit::parse_tables_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants",
        tables.vowels().len(),
        tables.consonants().len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let backend = match s.store.backend {
        StoreBackend::Memory => "memory",
        StoreBackend::File => "file",
        StoreBackend::Rest => "rest",
    };
    println!(
        "OK: store.backend={backend}, sheet.cards_per_page={}, sheet.columns={}",
        s.sheet.cards_per_page, s.sheet.columns
    );
}
