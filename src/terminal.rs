//! cellwin Terminal Session
//!
//! Puts the controlling terminal into raw mode on the alternate screen and
//! hands out key events. One `Terminal` per process. Dropping an active
//! session restores the terminal, so a panic does not leave the shell in
//! raw mode.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{cursor, event, execute, terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use log::{debug, info};

use crate::config::Config;
use crate::core::Screen;
use crate::input::InputEvent;

/// Something that produces input events one at a time, blocking until
/// one is available
pub trait KeySource {
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// An active terminal session
pub struct Terminal {
    timeout: Duration,
    active: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    pub fn init(config: &Config) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let timeout = config.input_timeout();
        info!("Terminal session started (input timeout {:?})", timeout);
        Ok(Self { timeout, active: true })
    }

    /// Current terminal size in columns and rows
    pub fn size() -> io::Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((cols as usize, rows as usize))
    }

    /// A started screen covering the whole terminal, drawing to stdout
    pub fn screen(&self) -> io::Result<Screen> {
        let (cols, rows) = Self::size()?;
        let mut screen = Screen::new(cols, rows, Box::new(stdout()));
        screen.begin()?;
        Ok(screen)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Wait up to the input timeout for one event
    pub fn poll(&mut self) -> io::Result<Option<InputEvent>> {
        if event::poll(self.timeout)? {
            let event = InputEvent::from_crossterm(event::read()?);
            if let Some(ref e) = event {
                debug!("Input: {:?}", e);
            }
            Ok(event)
        } else {
            Ok(None)
        }
    }

    /// Leave the alternate screen and raw mode
    pub fn cleanup(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        info!("Terminal session ended");
        Ok(())
    }
}

impl KeySource for Terminal {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(event) = InputEvent::from_crossterm(event::read()?) {
                return Ok(event);
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
