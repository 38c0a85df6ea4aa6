//! cellwin Input
//!
//! Key events as the toolkit sees them. Terminal events from crossterm are
//! folded into [`InputEvent`]:
//! - Printable characters become `Char`
//! - Ctrl+letter becomes the matching control character (Ctrl+C is `'\x03'`)
//! - Named keys become `Key`
//! - Terminal size changes become `Resize`; nothing in the toolkit reacts to it
//!
//! Key releases, mouse, focus and paste events are dropped.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single input event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A regular or control character
    Char { char: char },

    /// A named key
    Key { key: Key },

    /// The terminal changed size
    Resize { cols: u16, rows: u16 },
}

/// Named keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Escape,
    Enter,
    Tab,
    Backspace,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
}

/// Ctrl+C
pub const INTERRUPT: char = '\x03';

impl InputEvent {
    pub fn key(key: Key) -> Self {
        InputEvent::Key { key }
    }

    pub fn char(char: char) -> Self {
        InputEvent::Char { char }
    }

    /// Enter, or a raw line terminator
    pub fn is_confirm(&self) -> bool {
        matches!(
            self,
            InputEvent::Key { key: Key::Enter } | InputEvent::Char { char: '\n' | '\r' }
        )
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, InputEvent::Char { char: INTERRUPT })
    }

    /// Translate a crossterm event; `None` for events the toolkit ignores
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key_event(key),
            Event::Resize(cols, rows) => Some(InputEvent::Resize { cols, rows }),
            _ => None,
        }
    }

    fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let key = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
                let code = (c.to_ascii_lowercase() as u8) - b'a' + 1;
                return Some(InputEvent::Char { char: code as char });
            }
            KeyCode::Char(c) => return Some(InputEvent::Char { char: c }),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::Delete => Key::Delete,
            KeyCode::Esc => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::F(n) => match n {
                1 => Key::F1,
                2 => Key::F2,
                3 => Key::F3,
                4 => Key::F4,
                5 => Key::F5,
                6 => Key::F6,
                7 => Key::F7,
                8 => Key::F8,
                9 => Key::F9,
                10 => Key::F10,
                11 => Key::F11,
                12 => Key::F12,
                _ => return None,
            },
            _ => return None,
        };
        Some(InputEvent::Key { key })
    }
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        InputEvent::Key { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            InputEvent::from_crossterm(press(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputEvent::key(Key::Down))
        );
        assert_eq!(
            InputEvent::from_crossterm(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputEvent::key(Key::Up))
        );
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let event = InputEvent::from_crossterm(press(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        assert!(event.is_interrupt());
        let plain = InputEvent::from_crossterm(press(KeyCode::Char('c'), KeyModifiers::NONE)).unwrap();
        assert_eq!(plain, InputEvent::char('c'));
    }

    #[test]
    fn test_release_and_mouse_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(InputEvent::from_crossterm(release), None);
        assert_eq!(InputEvent::from_crossterm(Event::FocusGained), None);
    }

    #[test]
    fn test_resize_surfaces_as_event() {
        assert_eq!(
            InputEvent::from_crossterm(Event::Resize(100, 40)),
            Some(InputEvent::Resize { cols: 100, rows: 40 })
        );
    }

    #[test]
    fn test_confirm() {
        assert!(InputEvent::key(Key::Enter).is_confirm());
        assert!(InputEvent::char('\n').is_confirm());
        assert!(!InputEvent::key(Key::Down).is_confirm());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&InputEvent::key(Key::PageDown)).unwrap();
        assert_eq!(json, r#"{"type":"key","key":"page_down"}"#);
    }
}
