//! Header bar widget
//!
//! Badge, title and subtitle, with the backend indicator on the badge row.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use mood_app::BackendStatus;

use crate::theme::{palette, styles};

pub const BADGE: &str = "Mood-Based Guidance";
pub const TITLE: &str = "Mood-Based Quran & Hadith Finder";
pub const SUBTITLE: &str = "Find spiritual guidance based on your current feelings";

/// Main header showing the app title and backend status
pub struct MainHeader {
    backend: BackendStatus,
}

impl MainHeader {
    pub fn new(backend: BackendStatus) -> Self {
        Self { backend }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("✦ ", styles::accent()),
                Span::styled(BADGE, styles::text_secondary()),
            ]),
            Line::from(Span::styled(TITLE, styles::title())),
            Line::from(Span::styled(SUBTITLE, styles::text_muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);

        self.render_backend_status(inner, buf);
    }
}

impl MainHeader {
    /// Status dot and label, right-aligned on the first row
    fn render_backend_status(&self, inner: Rect, buf: &mut Buffer) {
        let (icon, label, style) = styles::backend_indicator(self.backend);
        let text = format!("{} {}", icon, label);
        let width = text.width() as u16;
        // Centered badge plus its "✦ " prefix
        let badge_width = BADGE.width() as u16 + 2;
        let badge_end = inner.width.saturating_sub(badge_width) / 2 + badge_width;
        if badge_end + width + 2 > inner.width {
            return;
        }
        let x = inner.x + inner.width - width - 1;
        buf.set_stringn(x, inner.y, &text, width as usize, style);
    }
}
