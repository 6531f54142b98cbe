use std::fs;
use std::path::Path;

use tracing::info;

use sangat_core::badge::{render_html, PrintSheet};
use sangat_core::registration::search::{filter, select};
use sangat_core::registration::Registration;
use sangat_core::settings::settings;

use super::registry_ops;

/// Records to print: explicit ids win over a search term.
fn pick<'a>(all: &'a [Registration], search: Option<&str>, ids: &[String]) -> Vec<&'a Registration> {
    if ids.is_empty() {
        filter(all, search.unwrap_or(""))
    } else {
        select(all, ids)
    }
}

pub fn print(store_path: Option<&Path>, output: &str, search: Option<&str>, ids: &[String]) {
    let store = registry_ops::open(store_path);
    let all = die!(store.list(), "Error listing registrations: {}");
    let picked = pick(&all, search, ids);
    if picked.is_empty() {
        println!("Nothing to print");
        return;
    }

    let s = settings();
    let sheet = PrintSheet::build(&picked, s);
    let html = die!(render_html(&sheet, s), "Error rendering badges: {}");
    die!(fs::write(output, html), "Error writing {output}: {}");
    info!(output, cards = sheet.card_count(), "badge sheet written");
    println!(
        "Wrote {} badges on {} pages to {output}",
        sheet.card_count(),
        sheet.pages.len()
    );
}
