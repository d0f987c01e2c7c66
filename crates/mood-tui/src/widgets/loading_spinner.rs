//! Small animated spinner shown beside the search button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub const LOADING_LABEL: &str = "Loading…";

const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Spinner glyph plus "Loading…"; the frame follows the app tick
pub struct LoadingSpinner {
    tick: u64,
}

impl LoadingSpinner {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }
}

impl Widget for LoadingSpinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.frame(), styles::accent()),
            Span::raw(" "),
            Span::styled(LOADING_LABEL, styles::text_muted()),
        ]);
        line.render(area, buf);
    }
}
