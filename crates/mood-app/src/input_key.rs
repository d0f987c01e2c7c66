//! Abstract input key event, independent of terminal library.
//!
//! The app layer never sees crossterm types; the TUI converts its key events
//! into `InputKey` at the boundary so headless drivers and tests can feed
//! keys directly.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (letters, digits, symbols, any script)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}
