//! Semantic style builders.

use mood_app::BackendStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

/// Highlighted dropdown row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Search Guidance" button; dimmed while a request is in flight
pub fn button(disabled: bool) -> Style {
    let style = Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    if disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn reference() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Backend indicator mapping ---

/// Returns `(icon, label, Style)` for the backend status dot in the header
pub fn backend_indicator(status: BackendStatus) -> (&'static str, &'static str, Style) {
    match status {
        BackendStatus::Online => (
            "●",
            "Online",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        BackendStatus::Offline => (
            "●",
            "Offline",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
        BackendStatus::Unknown => ("○", "Backend", Style::default().fg(palette::TEXT_MUTED)),
    }
}
