//! Centralized theme for the Mood Guide TUI.
//!
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;
