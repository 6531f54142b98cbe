//! Printable badges: text formatting, card fields, page layout, rendering.

mod card;
mod formatter;
mod render;
mod sheet;

pub use card::BadgeCard;
pub use formatter::{to_hindi_number, to_hindi_text};
pub use render::{render_html, render_text, RenderError, TEMPLATE_NAME};
pub use sheet::{PrintPage, PrintSheet};
