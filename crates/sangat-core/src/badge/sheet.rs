use serde::Serialize;
use tracing::debug;

use super::BadgeCard;
use crate::registration::Registration;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize)]
pub struct PrintPage {
    pub cards: Vec<BadgeCard>,
}

/// Badges split into fixed-size pages for printing.
#[derive(Debug, Clone, Serialize)]
pub struct PrintSheet {
    pub pages: Vec<PrintPage>,
}

impl PrintSheet {
    /// Cards keep the order of `regs`. The last page may be short.
    pub fn build(regs: &[&Registration], settings: &Settings) -> Self {
        let per_page = settings.sheet.cards_per_page.max(1);
        let pages: Vec<PrintPage> = regs
            .chunks(per_page)
            .map(|chunk| PrintPage {
                cards: chunk
                    .iter()
                    .map(|r| BadgeCard::from_registration(r, &settings.badge))
                    .collect(),
            })
            .collect();
        debug!(cards = regs.len(), pages = pages.len(), "print sheet built");
        Self { pages }
    }

    pub fn card_count(&self) -> usize {
        self.pages.iter().map(|p| p.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
