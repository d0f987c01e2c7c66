//! Key event handlers for the mood picker and the result card

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.presentation.visible {
        handle_key_card(key)
    } else if state.search.dropdown_open {
        handle_key_dropdown(state, key)
    } else {
        handle_key_normal(key)
    }
}

/// Handle key events while the result card is showing
fn handle_key_card(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q' | 'x' | ' ') => {
            Some(Message::CloseCard)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while the dropdown is open (query input has focus)
fn handle_key_dropdown(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Tab | InputKey::BackTab => Some(Message::CloseDropdown),

        InputKey::Down => Some(Message::HighlightNext),
        InputKey::Up => Some(Message::HighlightPrevious),
        InputKey::Enter => Some(Message::ChooseHighlighted),

        // Delete character
        InputKey::Backspace => {
            let mut query = state.search.query.clone();
            query.pop()?;
            Some(Message::QueryInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::QueryInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('s') => Some(Message::SubmitSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Type character, including space and 'q'
        InputKey::Char(c) => {
            let mut query = state.search.query.clone();
            query.push(c);
            Some(Message::QueryInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events on the main search screen
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(' ') | InputKey::Down | InputKey::Tab => Some(Message::ToggleDropdown),

        InputKey::Enter | InputKey::CharCtrl('s') => Some(Message::SubmitSearch),

        InputKey::Delete | InputKey::Backspace => Some(Message::ClearSelection),

        _ => None,
    }
}
