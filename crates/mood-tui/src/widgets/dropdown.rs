//! Mood dropdown: query input plus the filtered option list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use mood_app::SearchState;
use mood_core::MoodOption;

use super::{modal_overlay, truncate_to_width};
use crate::theme::{palette, styles};

pub const QUERY_PLACEHOLDER: &str = "Search moods…";
pub const NO_MATCHES: &str = "No matching moods";

/// Most option rows shown at once
const MAX_VISIBLE_OPTIONS: u16 = 8;

/// Dropdown list anchored under the trigger
pub struct MoodDropdown<'a> {
    search: &'a SearchState,
    options: Vec<&'a MoodOption>,
}

impl<'a> MoodDropdown<'a> {
    pub fn new(search: &'a SearchState, options: Vec<&'a MoodOption>) -> Self {
        Self { search, options }
    }

    /// Area directly under `trigger`, clamped to `screen`
    pub fn area(&self, trigger: Rect, screen: Rect) -> Rect {
        let rows = (self.options.len() as u16).clamp(1, MAX_VISIBLE_OPTIONS);
        // Borders + query row + options
        let wanted = rows + 3;
        let y = trigger.y.saturating_add(trigger.height);
        let available = screen.y.saturating_add(screen.height).saturating_sub(y);
        Rect::new(trigger.x, y, trigger.width, wanted.min(available))
    }

    /// First option index to draw so the highlight stays in view
    fn scroll_offset(&self, visible: usize) -> usize {
        match self.search.highlighted {
            Some(index) if visible > 0 && index >= visible => index + 1 - visible,
            _ => 0,
        }
    }
}

impl Widget for MoodDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 4 {
            return;
        }
        modal_overlay::clear_area(buf, area);

        let block = styles::glass_block(true).style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_width = inner.width.saturating_sub(3) as usize;

        // Query input row
        let query_line = if self.search.query.is_empty() {
            Line::from(vec![
                Span::styled("⌕ ", styles::accent()),
                Span::styled(QUERY_PLACEHOLDER, styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("⌕ ", styles::accent()),
                Span::styled(
                    truncate_to_width(&self.search.query, text_width),
                    styles::text_primary(),
                ),
                Span::styled("▏", styles::accent()),
            ])
        };
        query_line.render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let list = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        );
        if list.height == 0 {
            return;
        }

        if self.options.is_empty() {
            Line::styled(format!("  {}", NO_MATCHES), styles::text_muted())
                .render(Rect::new(list.x, list.y, list.width, 1), buf);
            return;
        }

        let visible = list.height as usize;
        let offset = self.scroll_offset(visible);
        let selected_value = self.search.selected.as_ref().map(|o| o.value.as_str());

        for (row, (index, option)) in self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let highlighted = self.search.highlighted == Some(index);
            let marker = if selected_value == Some(option.value.as_str()) {
                "✓ "
            } else {
                "  "
            };
            let style = if highlighted {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            let row_area = Rect::new(list.x, list.y + row as u16, list.width, 1);
            if highlighted {
                buf.set_style(row_area, style);
            }
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(truncate_to_width(&option.label, text_width), style),
            ])
            .render(row_area, buf);
        }
    }
}
