//! Color palette, loosely following a night-sky gradient with gold accents.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 28); // Terminal background
pub const CARD_BG: Color = Color::Rgb(22, 27, 48); // Panels and the card front
pub const POPUP_BG: Color = Color::Rgb(15, 23, 42); // Dropdown list
pub const CARD_BACK_BG: Color = Color::Rgb(36, 30, 70); // Revealed guidance face

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(71, 85, 105);
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(250, 204, 21); // Badge sparkle, highlight
pub const PRIMARY: Color = Color::Rgb(79, 70, 229); // Button
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(252, 165, 165);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 12);
