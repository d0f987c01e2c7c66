//! Result card: front face while waiting, guidance face after the flip

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mood_app::PresentationState;
use mood_core::GuidanceResult;

use super::modal_overlay;
use crate::theme::{palette, styles};

pub const PREPARING: &str = "Preparing guidance…";
pub const CLOSE_HINT: &str = " x close ";

pub const CARD_MAX_WIDTH: u16 = 64;
pub const CARD_HEIGHT: u16 = 14;

/// Where the card is drawn this frame, given entrance and flip progress.
///
/// The entrance grows the card from 80% to full size; a flip squeezes it
/// horizontally to a sliver and back.
pub fn card_rect(screen: Rect, presentation: &PresentationState) -> Rect {
    let full_width = CARD_MAX_WIDTH.min(screen.width.saturating_sub(4)).max(1);
    let full_height = CARD_HEIGHT.min(screen.height.saturating_sub(2)).max(1);

    let grow = 0.8 + 0.2 * presentation.entrance_progress();
    let squeeze = presentation.flip_scale();

    let width = ((f32::from(full_width) * grow * squeeze).round() as u16).clamp(2, full_width.max(2));
    let height = ((f32::from(full_height) * grow).round() as u16).clamp(1, full_height);

    modal_overlay::centered_rect(width, height, screen)
}

/// The card itself; draw it into the rect from [`card_rect`]
pub struct FlashCard<'a> {
    result: Option<&'a GuidanceResult>,
    show_back: bool,
}

impl<'a> FlashCard<'a> {
    pub fn new(result: Option<&'a GuidanceResult>, presentation: &PresentationState) -> Self {
        Self {
            result,
            show_back: presentation.showing_back(),
        }
    }
}

impl Widget for FlashCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        modal_overlay::clear_area(buf, area);
        modal_overlay::render_shadow(buf, area);

        let bg = if self.show_back {
            palette::CARD_BACK_BG
        } else {
            palette::CARD_BG
        };
        let mut block = styles::glass_block(true).style(Style::default().bg(bg));
        // Title text would spill over a card squeezed mid-flip
        if area.width > CLOSE_HINT.len() as u16 + 12 {
            block = block.title_top(Line::styled(CLOSE_HINT, styles::text_muted()).right_aligned());
            if let Some(kind) = self.result.and_then(|r| r.kind_label()).filter(|_| self.show_back)
            {
                block = block.title_top(
                    Line::styled(format!(" {} ", kind), styles::accent()).left_aligned(),
                );
            }
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        match (self.show_back, self.result) {
            (true, Some(result)) => render_back(result, inner, buf),
            _ => render_front(inner, buf),
        }
    }
}

fn render_front(inner: Rect, buf: &mut Buffer) {
    let y = inner.y + inner.height / 2;
    Paragraph::new(Line::styled(PREPARING, styles::text_secondary()))
        .alignment(Alignment::Center)
        .render(Rect::new(inner.x, y, inner.width, 1), buf);
}

fn render_back(result: &GuidanceResult, inner: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::styled(
            result.arabic.as_str(),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(result.urdu.as_str(), styles::text_secondary()),
        Line::default(),
        Line::styled(result.reference.as_str(), styles::reference()),
        Line::default(),
    ];
    let explanation = styles::reference().fg(palette::TEXT_PRIMARY);
    lines.extend(
        result
            .explanation_lines()
            .map(|line| Line::from(Span::styled(line, explanation))),
    );

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
