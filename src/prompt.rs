//! cellwin Prompt
//!
//! Reads a word or a line of text inside a window, echoing as the user
//! types. Input is taken from a [`KeySource`] and blocks until the
//! delimiter arrives:
//!
//! - [`Delimiter::Whitespace`] skips leading blanks and stops at the next
//!   blank or Enter, yielding one word
//! - [`Delimiter::Line`] stops at Enter or once `max` characters are typed;
//!   `max: 0` sets no limit
//!
//! Backspace edits, Escape or Ctrl+C cancels.

use crate::core::{WindowId, WindowManager};
use crate::error::Result;
use crate::input::{InputEvent, Key};
use crate::terminal::KeySource;

/// Where a prompt stops reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Whitespace,
    /// Up to `max` characters, or until Enter when `max` is 0
    Line { max: usize },
}

/// Outcome of feeding one event to a [`Scanner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Continue,
    Done(String),
    Cancelled,
}

/// Line editing state for one prompt
#[derive(Debug, Clone)]
pub struct Scanner {
    delimiter: Delimiter,
    text: String,
}

impl Scanner {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter, text: String::new() }
    }

    /// Text typed so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn feed(&mut self, event: &InputEvent) -> Scan {
        match event {
            InputEvent::Key { key: Key::Escape } => return Scan::Cancelled,
            e if e.is_interrupt() => return Scan::Cancelled,
            InputEvent::Key { key: Key::Backspace } | InputEvent::Char { char: '\x08' | '\x7f' } => {
                self.text.pop();
                return Scan::Continue;
            }
            _ => {}
        }

        match self.delimiter {
            Delimiter::Whitespace => {
                let blank = match event {
                    InputEvent::Key { key: Key::Enter | Key::Tab } => true,
                    InputEvent::Char { char } => char.is_whitespace(),
                    _ => return Scan::Continue,
                };
                if !blank {
                    if let InputEvent::Char { char } = event {
                        if !char.is_control() {
                            self.text.push(*char);
                        }
                    }
                    Scan::Continue
                } else if self.text.is_empty() {
                    Scan::Continue
                } else {
                    Scan::Done(std::mem::take(&mut self.text))
                }
            }
            Delimiter::Line { max } => {
                if event.is_confirm() {
                    return Scan::Done(std::mem::take(&mut self.text));
                }
                if let InputEvent::Char { char } = event {
                    if !char.is_control() {
                        self.text.push(*char);
                    }
                }
                if max > 0 && self.text.chars().count() >= max {
                    Scan::Done(std::mem::take(&mut self.text))
                } else {
                    Scan::Continue
                }
            }
        }
    }
}

/// Show `prompt` at (x, y) in `window` and read input after it.
///
/// Returns `None` when the user cancels.
pub fn read_input<K: KeySource>(
    wm: &mut WindowManager,
    keys: &mut K,
    window: WindowId,
    x: usize,
    y: usize,
    prompt: Option<&str>,
    delimiter: Delimiter,
) -> Result<Option<String>> {
    let mut col = x;
    if let Some(prompt) = prompt {
        wm.print(window, x, y, prompt)?;
        col += prompt.chars().count();
    }

    let mut scanner = Scanner::new(delimiter);
    let mut shown = 0;
    loop {
        let event = keys.next_event()?;
        match scanner.feed(&event) {
            Scan::Continue => {
                // Pad to the previous length so erased characters disappear
                let len = scanner.text().chars().count();
                let echo = format!("{:<width$}", scanner.text(), width = shown.max(len));
                wm.print(window, col, y, &echo)?;
                shown = len;
            }
            Scan::Done(text) => {
                wm.print(window, col, y, &text)?;
                return Ok(Some(text));
            }
            Scan::Cancelled => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::{BorderStyle, Screen};
    use std::collections::VecDeque;
    use std::io;

    struct Scripted(VecDeque<InputEvent>);

    impl KeySource for Scripted {
        fn next_event(&mut self) -> io::Result<InputEvent> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    fn typed(text: &str) -> Vec<InputEvent> {
        text.chars().map(InputEvent::char).collect()
    }

    fn scan_all(delimiter: Delimiter, events: &[InputEvent]) -> Scan {
        let mut scanner = Scanner::new(delimiter);
        for event in events {
            match scanner.feed(event) {
                Scan::Continue => continue,
                other => return other,
            }
        }
        Scan::Continue
    }

    #[test]
    fn test_word_skips_leading_blanks() {
        let events = typed("   hello world");
        assert_eq!(scan_all(Delimiter::Whitespace, &events), Scan::Done("hello".into()));
    }

    #[test]
    fn test_word_ends_at_enter() {
        let mut events = typed("abc");
        events.push(InputEvent::key(Key::Enter));
        assert_eq!(scan_all(Delimiter::Whitespace, &events), Scan::Done("abc".into()));
    }

    #[test]
    fn test_line_keeps_spaces_and_stops_at_max() {
        let mut events = typed("a b");
        events.push(InputEvent::key(Key::Enter));
        assert_eq!(scan_all(Delimiter::Line { max: 255 }, &events), Scan::Done("a b".into()));

        let events = typed("abcdef");
        assert_eq!(scan_all(Delimiter::Line { max: 4 }, &events), Scan::Done("abcd".into()));
    }

    #[test]
    fn test_line_without_limit_ignores_named_keys() {
        let mut scanner = Scanner::new(Delimiter::Line { max: 0 });
        assert_eq!(scanner.feed(&InputEvent::key(Key::Down)), Scan::Continue);
        assert_eq!(scanner.text(), "");

        let mut events = typed("abc");
        events.push(InputEvent::key(Key::Left));
        events.push(InputEvent::key(Key::Enter));
        assert_eq!(scan_all(Delimiter::Line { max: 0 }, &events), Scan::Done("abc".into()));
    }

    #[test]
    fn test_backspace_and_cancel() {
        let mut events = typed("abx");
        events.push(InputEvent::key(Key::Backspace));
        events.extend(typed("c\n"));
        assert_eq!(scan_all(Delimiter::Line { max: 10 }, &events), Scan::Done("abc".into()));

        let mut events = typed("ab");
        events.push(InputEvent::key(Key::Escape));
        assert_eq!(scan_all(Delimiter::Line { max: 10 }, &events), Scan::Cancelled);
        assert_eq!(scan_all(Delimiter::Whitespace, &[InputEvent::char('\x03')]), Scan::Cancelled);
    }

    #[test]
    fn test_read_input_echoes_into_window() {
        let config = Config { border: BorderStyle::Ascii, ..Config::default() };
        let mut wm = WindowManager::new(Screen::headless(80, 24), config);
        let win = wm.create_window(0, 0, 40, 10, "Input", None).unwrap();

        let mut events = typed("hi there");
        events.push(InputEvent::key(Key::Enter));
        let mut keys = Scripted(events.into());

        let got = read_input(&mut wm, &mut keys, win, 2, 5, Some("Input: "), Delimiter::Line { max: 255 }).unwrap();
        assert_eq!(got.as_deref(), Some("hi there"));
        assert_eq!(&wm.screen().display().row_text(5)[2..17], "Input: hi there");
    }

    #[test]
    fn test_read_input_cancel() {
        let mut wm = WindowManager::new(Screen::headless(80, 24), Config::default());
        let win = wm.create_window(0, 0, 40, 10, "Input", None).unwrap();
        let mut keys = Scripted(vec![InputEvent::char('a'), InputEvent::key(Key::Escape)].into());
        let got = read_input(&mut wm, &mut keys, win, 2, 5, None, Delimiter::Whitespace).unwrap();
        assert_eq!(got, None);
    }
}
