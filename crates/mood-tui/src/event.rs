//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mood_app::message::Message;
use mood_app::InputKey;
use mood_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        _ => None, // Unsupported keys ignored
    }
}

/// Only left-button presses matter; drags, scrolls and releases are dropped
pub fn mouse_event_to_message(mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Translate one terminal event into a message
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse),
        _ => None,
    }
}

/// Poll for terminal events, waiting at most `tick_rate`.
///
/// Returns `Message::Tick` when nothing arrived so animations keep moving.
pub fn poll(tick_rate: Duration) -> Result<Option<Message>> {
    if event::poll(tick_rate)? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_non_latin_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('خ'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('خ')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('s')));
    }

    #[test]
    fn test_navigation_and_action_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Tab, InputKey::Tab),
            (KeyCode::Backspace, InputKey::Backspace),
            (KeyCode::Delete, InputKey::Delete),
        ];
        for (code, expected) in cases {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(event_to_message(Event::Key(key)).is_none());
    }

    #[test]
    fn test_left_click_becomes_click_message() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            event_to_message(Event::Mouse(mouse)),
            Some(Message::Click { column: 7, row: 3 })
        ));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert!(mouse_event_to_message(mouse).is_none());
    }
}
