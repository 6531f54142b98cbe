use minijinja::{context, Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::debug_span;
use unicode_width::UnicodeWidthStr;

use super::{BadgeCard, PrintSheet};
use crate::settings::{BadgeSettings, Settings, SheetLayout};

/// Name of the embedded sheet template. The `.html` suffix turns on HTML
/// auto-escaping.
pub const TEMPLATE_NAME: &str = "badge_sheet.html";

const SHEET_TEMPLATE: &str = include_str!("../../templates/badge_sheet.html");

/// Header plus subheader height on a card.
const CARD_CHROME_MM: f64 = 18.0;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Millimetre values as they appear in the stylesheet.
#[derive(Serialize)]
struct SheetCss {
    page_width: String,
    page_height: String,
    padding: String,
    gap: String,
    columns: usize,
    card_width: String,
    card_height: String,
    body_height: String,
}

impl SheetCss {
    fn from_layout(l: &SheetLayout) -> Self {
        Self {
            page_width: mm(l.page_width_mm),
            page_height: mm(l.page_height_mm),
            padding: mm(l.padding_mm),
            gap: mm(l.gap_mm),
            columns: l.columns,
            card_width: mm(l.card_width_mm),
            card_height: mm(l.card_height_mm),
            body_height: mm((l.card_height_mm - CARD_CHROME_MM).max(0.0)),
        }
    }
}

/// `8.0` → `"8"`, `0.5` → `"0.5"`.
fn mm(v: f64) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render the whole sheet as one printable HTML document.
pub fn render_html(sheet: &PrintSheet, settings: &Settings) -> Result<String, RenderError> {
    let _span = debug_span!("render_html", pages = sheet.pages.len()).entered();
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, SHEET_TEMPLATE)?;
    let html = env.get_template(TEMPLATE_NAME)?.render(context! {
        badge => &settings.badge,
        css => SheetCss::from_layout(&settings.sheet),
        pages => &sheet.pages,
    })?;
    Ok(html)
}

/// Plain-text preview of one badge for the terminal.
pub fn render_text(card: &BadgeCard, labels: &BadgeSettings) -> String {
    let rows = [
        (labels.name_label.as_str(), card.name.as_str()),
        (labels.address_label.as_str(), card.address.as_str()),
        (labels.mobile_label.as_str(), card.mobile.as_str()),
        (labels.age_label.as_str(), card.age.as_str()),
        (labels.emergency_label.as_str(), card.emergency.as_str()),
    ];
    let width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&labels.header_title);
    out.push('\n');
    out.push_str(&labels.subheader);
    out.push('\n');
    for (label, value) in rows {
        out.push_str(label);
        out.push_str(&" ".repeat(width - label.width()));
        out.push_str(" : ");
        out.push_str(value);
        out.push('\n');
    }
    if !card.flags.is_empty() {
        out.push('[');
        out.push_str(&card.flags.join("] ["));
        out.push_str("]\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{Answer, NewRegistration, Registration};
    use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
    use time::OffsetDateTime;

    fn settings() -> Settings {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
    }

    fn reg(id: &str, name: &str) -> Registration {
        Registration::from_new(
            id.into(),
            NewRegistration {
                name: name.into(),
                surname: "Singh".into(),
                mobile_number: "9876543210".into(),
                emergency_contact_number: "9123456780".into(),
                aadhaar_number: "123456789012".into(),
                age: Some(65),
                hypertension: Some(Answer::Yes),
                ..Default::default()
            },
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn mm_formatting() {
        assert_eq!(mm(8.0), "8");
        assert_eq!(mm(0.5), "0.5");
        assert_eq!(mm(67.25), "67.25");
        assert_eq!(mm(210.0), "210");
    }

    #[test]
    fn html_has_one_page_div_per_page() {
        let s = settings();
        let all: Vec<Registration> = (0..9).map(|i| reg(&format!("r{i}"), "Ram")).collect();
        let refs: Vec<&Registration> = all.iter().collect();
        let sheet = PrintSheet::build(&refs, &s);
        let html = render_html(&sheet, &s).unwrap();
        assert_eq!(html.matches("class=\"print-page\"").count(), 2);
        assert_eq!(html.matches("class=\"badge-card\"").count(), 9);
        assert!(html.contains("width: 95mm;"));
        assert!(html.contains("height: 49mm;"));
        assert!(html.contains("repeat(2, 1fr)"));
    }

    #[test]
    fn html_carries_badge_text() {
        let s = settings();
        let r = reg("r1", "Ram");
        let sheet = PrintSheet::build(&[&r], &s);
        let html = render_html(&sheet, &s).unwrap();
        assert!(html.contains("रम सिनघ"));
        assert!(html.contains("६५"));
        assert!(html.contains("वृद्ध संगत"));
        assert!(html.contains("<div class=\"badge-flag\">हाइपर</div>"));
        assert!(html.contains("badge-photo-placeholder"));
    }

    #[test]
    fn html_escapes_record_text() {
        let s = settings();
        let mut r = reg("r1", "Ram");
        r.image_url = Some("x\" onerror=\"alert(1)".into());
        let sheet = PrintSheet::build(&[&r], &s);
        let html = render_html(&sheet, &s).unwrap();
        assert!(!html.contains("onerror=\"alert"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn empty_sheet_renders_document_without_pages() {
        let s = settings();
        let html = render_html(&PrintSheet::build(&[], &s), &s).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("class=\"print-page\"").count(), 0);
    }

    #[test]
    fn text_preview_aligns_labels() {
        let s = settings();
        let card = BadgeCard::from_registration(&reg("r1", "Ram"), &s.badge);
        let text = render_text(&card, &s.badge);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], s.badge.header_title);
        assert_eq!(lines[1], s.badge.subheader);

        let rows = &lines[2..7];
        let colon_at: Vec<usize> = rows
            .iter()
            .map(|l| l.split(" : ").next().unwrap().width())
            .collect();
        assert!(colon_at.windows(2).all(|w| w[0] == w[1]));
        assert!(rows[0].ends_with("रम सिनघ"));
        assert!(rows[4].ends_with("९१२३४५६७८०"));
        assert_eq!(lines[7], "[हाइपर]");
    }
}
