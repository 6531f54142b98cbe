use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use sangat_core::badge::{render_text, BadgeCard};
use sangat_core::numeric::format_aadhaar;
use sangat_core::registration::export::write_csv;
use sangat_core::registration::search::filter;
use sangat_core::registration::store::{open_store, RegistrationStore, StoreError};
use sangat_core::registration::{NewRegistration, Registration};
use sangat_core::settings::settings;

pub fn open(store_path: Option<&Path>) -> Box<dyn RegistrationStore> {
    die!(
        open_store(&settings().store, store_path),
        "Error opening store: {}"
    )
}

pub fn add(store_path: Option<&Path>, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let new: NewRegistration = die!(serde_json::from_str(&content), "Error parsing {file}: {}");
    let mut store = open(store_path);
    let reg = die!(store.create(new), "Error: {}");
    println!("Added: {} ({})", reg.full_name(), reg.id);
}

pub fn edit(store_path: Option<&Path>, id: &str, file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mut store = open(store_path);
    let reg = die!(update_from_json(store.as_mut(), id, &content), "Error: {}");
    println!("Updated: {} ({})", reg.full_name(), reg.id);
}

/// Replace the form fields of `id` from a JSON form. A form without
/// `image_url` keeps the stored photo.
fn update_from_json(
    store: &mut dyn RegistrationStore,
    id: &str,
    json: &str,
) -> Result<Registration, StoreError> {
    let changes: NewRegistration =
        serde_json::from_str(json).map_err(|e| StoreError::Decode(e.to_string()))?;
    store.update(id, changes)
}

pub fn list(store_path: Option<&Path>, search: Option<&str>) {
    let store = open(store_path);
    let all = die!(store.list(), "Error listing registrations: {}");
    let rows = filter(&all, search.unwrap_or(""));
    if rows.is_empty() {
        println!("(empty)");
        return;
    }
    let name_width = rows
        .iter()
        .map(|r| r.full_name().width())
        .max()
        .unwrap_or(0);
    for r in &rows {
        println!("{}", list_line(r, name_width));
    }
    println!("---");
    println!("{} of {} registrations", rows.len(), all.len());
}

fn list_line(r: &Registration, name_width: usize) -> String {
    let name = r.full_name();
    let pad = name_width.saturating_sub(name.width());
    let age = r.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into());
    format!(
        "{}\t{name}{}\t{}\t{}\t{age}",
        r.id,
        " ".repeat(pad),
        r.mobile_number,
        format_aadhaar(&r.aadhaar_number),
    )
}

pub fn show(store_path: Option<&Path>, id: &str) {
    let store = open(store_path);
    let reg = die!(store.get(id), "Error: {}");
    let json = die!(serde_json::to_string_pretty(&reg), "Error encoding record: {}");
    println!("{json}");
    println!();
    let labels = &settings().badge;
    print!("{}", render_text(&BadgeCard::from_registration(&reg, labels), labels));
}

pub fn remove(store_path: Option<&Path>, id: &str) {
    let mut store = open(store_path);
    die!(store.delete(id), "Error: {}");
    println!("Removed: {id}");
}

pub fn export_csv(store_path: Option<&Path>, file: &str) {
    let store = open(store_path);
    let all = die!(store.list(), "Error listing registrations: {}");
    let out = die!(File::create(file), "Error creating {file}: {}");
    die!(write_csv(BufWriter::new(out), &all), "Error writing {file}: {}");
    println!("Exported {} registrations to {file}", all.len());
}
