//! Custom widget components

mod dropdown;
mod flash_card;
mod header;
mod key_hints;
mod loading_spinner;
pub mod modal_overlay;
mod search_panel;

pub use dropdown::MoodDropdown;
pub use flash_card::{card_rect, FlashCard, CARD_HEIGHT, CARD_MAX_WIDTH};
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use loading_spinner::LoadingSpinner;
pub use search_panel::{trigger_rect, SearchPanel};

use unicode_width::UnicodeWidthChar;

/// Cut `text` so it fits in `width` terminal cells, ending in `…` when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
