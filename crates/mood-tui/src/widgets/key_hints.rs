//! One-row key hint bar for the current screen mode

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mood_app::AppState;

use crate::theme::styles;

/// Hints that match what the keys do right now
pub struct KeyHints {
    hints: &'static [(&'static str, &'static str)],
}

const CARD_HINTS: &[(&str, &str)] = &[("Esc/x", "close"), ("Ctrl+C", "quit")];

const DROPDOWN_HINTS: &[(&str, &str)] = &[
    ("type", "filter"),
    ("↑/↓", "move"),
    ("Enter", "choose"),
    ("Ctrl+S", "search"),
    ("Esc", "close"),
];

const MAIN_HINTS: &[(&str, &str)] = &[
    ("Space", "moods"),
    ("Enter", "search"),
    ("Del", "clear"),
    ("q", "quit"),
];

impl KeyHints {
    pub fn for_state(state: &AppState) -> Self {
        let hints = if state.presentation.visible {
            CARD_HINTS
        } else if state.search.dropdown_open {
            DROPDOWN_HINTS
        } else {
            MAIN_HINTS
        };
        Self { hints }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::accent()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
