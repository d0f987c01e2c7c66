//! Search panel: mood label, dropdown trigger, search button, status lines

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mood_app::SearchState;

use super::{truncate_to_width, LoadingSpinner};
use crate::theme::{palette, styles};

pub const LABEL: &str = "Select your mood";
pub const TRIGGER_PLACEHOLDER: &str = "Choose a mood or type to search…";
pub const BUTTON_LABEL: &str = "Search Guidance";

/// Width kept free to the right of the button for the spinner
const SPINNER_WIDTH: u16 = 12;

/// Bordered box under the label that opens the dropdown
pub fn trigger_rect(panel: Rect) -> Rect {
    let inner = inner_rect(panel);
    Rect::new(
        inner.x,
        inner.y.saturating_add(1),
        inner.width,
        3.min(inner.height.saturating_sub(1)),
    )
}

fn inner_rect(panel: Rect) -> Rect {
    styles::glass_block(false).inner(panel)
}

/// The mood picker and search controls
pub struct SearchPanel<'a> {
    search: &'a SearchState,
    tick: u64,
}

impl<'a> SearchPanel<'a> {
    pub fn new(search: &'a SearchState, tick: u64) -> Self {
        Self { search, tick }
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.search.dropdown_open)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Line::styled(LABEL, styles::text_secondary()).render(row(inner, 0), buf);

        self.render_trigger(trigger_rect(area), buf);

        // Button row sits under the trigger with one row of breathing room
        self.render_button(row(inner, 5), buf);

        if let Some(error) = &self.search.error_message {
            Paragraph::new(Line::styled(error.as_str(), styles::error()))
                .render(row(inner, 7), buf);
        }
    }
}

impl SearchPanel<'_> {
    fn render_trigger(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let block = styles::glass_block(self.search.dropdown_open);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let chevron = if self.search.dropdown_open { "▴" } else { "▾" };
        let text_width = inner.width.saturating_sub(3) as usize;
        let (text, style) = match &self.search.selected {
            Some(option) => (option.label.as_str(), styles::text_primary()),
            None => (TRIGGER_PLACEHOLDER, styles::text_muted()),
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate_to_width(text, text_width), style),
        ]);
        line.render(inner, buf);
        buf.set_string(inner.x + inner.width - 2, inner.y, chevron, styles::text_muted());
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let loading = self.search.loading;
        let button_width = area.width.saturating_sub(SPINNER_WIDTH).max(area.width.min(20));
        let button = Rect::new(area.x, area.y, button_width, 1);

        Paragraph::new(format!("⌕ {}", BUTTON_LABEL))
            .alignment(Alignment::Center)
            .style(styles::button(loading))
            .render(button, buf);

        if loading && area.width > button_width + 1 {
            let spinner = Rect::new(
                button.x + button_width + 1,
                area.y,
                area.width - button_width - 1,
                1,
            );
            LoadingSpinner::new(self.tick).render(spinner, buf);
        }
    }
}

/// One row of `area`, or an empty rect when `area` is too short
fn row(area: Rect, offset: u16) -> Rect {
    if offset >= area.height {
        return Rect::new(area.x, area.y, area.width, 0);
    }
    Rect::new(area.x, area.y + offset, area.width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mood_core::MoodOption;

    fn panel_area() -> Rect {
        Rect::new(0, 0, 72, 10)
    }

    #[test]
    fn test_idle_panel_literals() {
        let mut term = TestTerminal::new();
        let search = SearchState::new();
        term.render_widget(SearchPanel::new(&search, 0), panel_area());

        assert!(term.line_contains(1, "Select your mood"));
        assert!(term.line_contains(3, "Choose a mood or type to search…"));
        assert!(term.line_contains(6, "Search Guidance"));
        assert!(!term.buffer_contains("Loading…"));
    }

    #[test]
    fn test_trigger_shows_selected_label() {
        let mut term = TestTerminal::new();
        let mut search = SearchState::new();
        search.choose(MoodOption::new("Peaceful", "peaceful"));
        term.render_widget(SearchPanel::new(&search, 0), panel_area());

        assert!(term.line_contains(3, "Peaceful"));
        assert!(!term.buffer_contains("Choose a mood"));
    }

    #[test]
    fn test_loading_shows_spinner_and_dims_button() {
        let mut term = TestTerminal::new();
        let mut search = SearchState::new();
        search.loading = true;
        term.render_widget(SearchPanel::new(&search, 0), panel_area());

        assert!(term.line_contains(6, "Loading…"));
        let button_cell = &term.buffer()[(2, 6)];
        assert!(button_cell.modifier.contains(ratatui::style::Modifier::DIM));
    }

    #[test]
    fn test_error_line() {
        let mut term = TestTerminal::new();
        let mut search = SearchState::new();
        search.error_message = Some("Please select or type a mood".to_string());
        term.render_widget(SearchPanel::new(&search, 0), panel_area());

        assert!(term.line_contains(8, "Please select or type a mood"));
    }

    #[test]
    fn test_trigger_rect_sits_under_label() {
        let trigger = trigger_rect(Rect::new(4, 5, 72, 10));
        assert_eq!(trigger, Rect::new(5, 7, 70, 3));
    }

    #[test]
    fn test_tiny_panel_does_not_panic() {
        let mut term = TestTerminal::compact();
        let search = SearchState::new();
        term.render_widget(SearchPanel::new(&search, 0), Rect::new(0, 0, 6, 3));
    }
}
